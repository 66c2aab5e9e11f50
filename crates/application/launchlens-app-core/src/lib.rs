pub mod app_core;
pub mod debounce;
pub mod detail;
pub mod domain;
pub mod favorites;
pub mod list;
pub mod viewmodel;

pub use app_core::*;
pub use debounce::{DebounceTicket, Debouncer};
pub use detail::LaunchDetailKernel;
pub use domain::{DetailState, FavoritesState, FetchTarget, ListConfig, ListState, RequestSeq};
pub use favorites::FavoritesKernel;
pub use list::LaunchListKernel;
pub use viewmodel::*;
