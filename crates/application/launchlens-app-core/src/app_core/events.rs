use launchlens_core::{Launch, LaunchPage};

use crate::debounce::DebounceTicket;
use crate::domain::{FetchTarget, RequestSeq};

#[derive(Debug, Clone)]
pub enum ListEvent {
    QueryEdited(String),
    DebounceElapsed {
        ticket: DebounceTicket,
        query: String,
    },
    FetchStarted {
        request: RequestSeq,
        target: FetchTarget,
        refreshing: bool,
    },
    FetchSucceeded {
        request: RequestSeq,
        page: LaunchPage,
    },
    FetchFailed {
        request: RequestSeq,
        message: String,
    },
}

impl ListEvent {
    /// Request number for fetch completions.
    pub fn completion_of(&self) -> Option<RequestSeq> {
        match self {
            ListEvent::FetchSucceeded { request, .. } | ListEvent::FetchFailed { request, .. } => {
                Some(*request)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DetailEvent {
    LoadStarted {
        request: RequestSeq,
        id: String,
    },
    LaunchLoaded {
        request: RequestSeq,
        launch: Launch,
    },
    LoadFailed {
        request: RequestSeq,
        message: String,
    },
    MembershipResolved {
        request: RequestSeq,
        favorited: bool,
    },
    FavoriteToggled {
        favorited: bool,
    },
    FavoriteWriteFinished,
}

impl DetailEvent {
    pub fn completion_of(&self) -> Option<RequestSeq> {
        match self {
            DetailEvent::LaunchLoaded { request, .. }
            | DetailEvent::LoadFailed { request, .. }
            | DetailEvent::MembershipResolved { request, .. } => Some(*request),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum FavoritesEvent {
    ReloadStarted { request: RequestSeq },
    Loaded {
        request: RequestSeq,
        favorites: Vec<Launch>,
    },
}
