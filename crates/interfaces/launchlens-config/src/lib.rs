//! Central configuration constants for the remote API, paging, and local storage.

/// Launch Library 2 endpoint the client talks to unless overridden.
pub const DEFAULT_API_BASE_URL: &str = "https://ll.thespacedevs.com/2.2.0";

/// Environment variable that overrides [`DEFAULT_API_BASE_URL`].
pub const API_BASE_URL_ENV: &str = "LAUNCHLENS_API_URL";

/// Default page size for upcoming and search listings.
pub const DEFAULT_PAGE_LIMIT: u32 = 15;

/// Default page offset for upcoming listings.
pub const DEFAULT_PAGE_OFFSET: u32 = 0;

/// Largest page size the API accepts.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Quiet period after the last keystroke before a search is issued.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Per-request timeout for the HTTP client.
pub const HTTP_TIMEOUT_SECS: u64 = 20;

pub const USER_AGENT: &str = concat!("launchlens/", env!("CARGO_PKG_VERSION"));

/// Storage key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "launchlens_favorites";

/// Environment variable that overrides the platform data directory.
pub const DATA_DIR_ENV: &str = "LAUNCHLENS_DATA_DIR";

/// File name of the on-device key-value database.
pub const DATA_FILENAME: &str = "launchlens.redb";

pub const LIST_LOAD_FAILED: &str = "Failed to load launches. Please try again.";
pub const DETAIL_LOAD_FAILED: &str = "Failed to load launch details.";

/// Convenience function to clamp a page size into the accepted range.
pub fn clamp_page_limit(v: u32) -> u32 {
    v.clamp(1, MAX_PAGE_LIMIT)
}
