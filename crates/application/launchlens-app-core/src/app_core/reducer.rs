use crate::domain::{DetailState, FavoritesState, ListState};

use super::events::{DetailEvent, FavoritesEvent, ListEvent};

/// State that evolves by folding events.
pub trait Reduce: Clone {
    type Event;

    fn reduce(self, ev: Self::Event) -> Self;
}

impl Reduce for ListState {
    type Event = ListEvent;

    fn reduce(self, ev: ListEvent) -> Self {
        reduce_list(self, ev)
    }
}

impl Reduce for DetailState {
    type Event = DetailEvent;

    fn reduce(self, ev: DetailEvent) -> Self {
        reduce_detail(self, ev)
    }
}

impl Reduce for FavoritesState {
    type Event = FavoritesEvent;

    fn reduce(self, ev: FavoritesEvent) -> Self {
        reduce_favorites(self, ev)
    }
}

pub fn reduce_list(mut state: ListState, ev: ListEvent) -> ListState {
    match ev {
        ListEvent::QueryEdited(query) => state.search_query = query,

        // Scheduling is the kernel's business; nothing visible changes yet.
        ListEvent::DebounceElapsed { .. } => {}

        ListEvent::FetchStarted {
            request,
            target,
            refreshing,
        } => {
            state.loading = true;
            state.refreshing = refreshing;
            state.error = None;
            state.latest_request = Some(request);
            state.last_target = Some(target);
        }

        ListEvent::FetchSucceeded { request: _, page } => {
            state.launches = page.results;
            state.loading = false;
            state.refreshing = false;
        }

        // The previous list stays on screen under the error.
        ListEvent::FetchFailed {
            request: _,
            message,
        } => {
            state.error = Some(message);
            state.loading = false;
            state.refreshing = false;
        }
    }
    state
}

pub fn reduce_detail(mut state: DetailState, ev: DetailEvent) -> DetailState {
    match ev {
        DetailEvent::LoadStarted { request, id } => {
            if state.launch_id.as_deref() != Some(id.as_str()) {
                state.launch = None;
                state.favorited = false;
                state.membership_known = false;
                state.favorite_touched = false;
            }
            state.launch_id = Some(id);
            state.loading = true;
            state.error = None;
            state.latest_request = Some(request);
        }

        DetailEvent::LaunchLoaded { request: _, launch } => {
            state.launch = Some(launch);
            state.loading = false;
        }

        DetailEvent::LoadFailed {
            request: _,
            message,
        } => {
            state.error = Some(message);
            state.loading = false;
        }

        DetailEvent::MembershipResolved {
            request: _,
            favorited,
        } => {
            state.membership_known = true;
            if !state.favorite_touched {
                state.favorited = favorited;
            }
        }

        DetailEvent::FavoriteToggled { favorited } => {
            state.favorited = favorited;
            state.favorite_touched = true;
            state.pending_writes += 1;
        }

        DetailEvent::FavoriteWriteFinished => {
            state.pending_writes = state.pending_writes.saturating_sub(1);
        }
    }
    state
}

pub fn reduce_favorites(mut state: FavoritesState, ev: FavoritesEvent) -> FavoritesState {
    match ev {
        FavoritesEvent::ReloadStarted { request } => state.latest_request = Some(request),
        FavoritesEvent::Loaded {
            request: _,
            favorites,
        } => {
            state.favorites = favorites;
            state.loaded = true;
        }
    }
    state
}
