#[derive(Debug, Clone)]
pub enum ListCommand {
    /// Screen mounted: load the upcoming page right away.
    Activate,
    /// Search text edited; the fetch waits for the debounce window.
    QueryChanged(String),
    /// Pull-to-refresh: clears the query and reloads upcoming launches.
    Refresh,
    Retry,
}

#[derive(Debug, Clone)]
pub enum DetailCommand {
    Activate(String),
    Retry,
    ToggleFavorite,
}

#[derive(Debug, Clone)]
pub enum FavoritesCommand {
    Focus,
}
