pub mod commands;
pub mod events;
pub mod reducer;
pub mod store;

pub use commands::{DetailCommand, FavoritesCommand, ListCommand};
pub use events::{DetailEvent, FavoritesEvent, ListEvent};
pub use reducer::{reduce_detail, reduce_favorites, reduce_list, Reduce};
pub use store::{DetailStore, FavoritesStateStore, ListStore, StateStore};
