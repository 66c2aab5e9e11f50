use std::time::Duration;

use launchlens_core::Launch;

/// Per-kernel request number. Only the completion carrying the latest issued
/// number is applied; anything older is discarded on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// What the list screen asked the remote source for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    Upcoming,
    Search(String),
}

impl FetchTarget {
    /// Blank queries fall back to the plain upcoming listing.
    pub fn for_query(query: &str) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            FetchTarget::Upcoming
        } else {
            FetchTarget::Search(trimmed.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub page_limit: u32,
    pub debounce: Duration,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_limit: launchlens_config::DEFAULT_PAGE_LIMIT,
            debounce: Duration::from_millis(launchlens_config::SEARCH_DEBOUNCE_MS),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub launches: Vec<Launch>,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
    pub search_query: String,
    pub latest_request: Option<RequestSeq>,
    pub last_target: Option<FetchTarget>,
}

impl ListState {
    /// Full-screen spinner: nothing to show yet.
    pub fn shows_spinner(&self) -> bool {
        self.loading && self.launches.is_empty()
    }

    /// Full-screen error with a retry action.
    pub fn shows_blocking_error(&self) -> bool {
        self.error.is_some() && self.launches.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub launch_id: Option<String>,
    pub launch: Option<Launch>,
    pub loading: bool,
    pub error: Option<String>,
    pub favorited: bool,
    /// Set when the stored membership for the current launch has been read.
    pub membership_known: bool,
    /// Set once the user toggles; a late membership answer must not undo it.
    pub favorite_touched: bool,
    pub pending_writes: usize,
    pub latest_request: Option<RequestSeq>,
}

impl DetailState {
    /// Toggling needs the record and its stored membership; before that a tap
    /// would flip the default `false`.
    pub fn can_toggle_favorite(&self) -> bool {
        self.launch.is_some() && self.membership_known
    }
}

#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    pub favorites: Vec<Launch>,
    pub loaded: bool,
    pub latest_request: Option<RequestSeq>,
}
