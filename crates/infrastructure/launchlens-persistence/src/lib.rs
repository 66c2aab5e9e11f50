mod api;
mod codec;
mod error;
mod favorites;
mod maintenance;
mod memory_store;
mod redb_store;

pub use api::*;
pub use error::*;
pub use favorites::FavoritesStore;
pub use memory_store::MemoryKeyValueStore;
pub use redb_store::RedbKeyValueStore;
