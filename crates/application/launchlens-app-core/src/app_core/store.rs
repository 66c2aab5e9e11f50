use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{DetailState, FavoritesState, ListState};

use super::reducer::Reduce;

/// Shared handle to screen state. Readers get clones; writers go through
/// [`StateStore::apply`].
pub struct StateStore<S> {
    inner: Arc<Mutex<S>>,
}

pub type ListStore = StateStore<ListState>;
pub type DetailStore = StateStore<DetailState>;
pub type FavoritesStateStore = StateStore<FavoritesState>;

impl<S> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Reduce + Default> Default for StateStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Reduce> StateStore<S> {
    pub fn new(state: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> S {
        self.lock().clone()
    }

    pub fn apply(&self, ev: S::Event) {
        let mut guard = self.lock();
        let next = guard.clone().reduce(ev);
        *guard = next;
    }

    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock())
    }
}
