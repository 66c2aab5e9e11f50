use launchlens_persistence::{FavoritesStore, KeyValueStore};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app_core::{FavoritesCommand, FavoritesEvent, FavoritesStateStore};
use crate::domain::{FavoritesState, RequestSeq};

/// Backs the favorites tab: re-reads the stored list every time it gains focus.
pub struct FavoritesKernel<K> {
    store: FavoritesStateStore,
    favorites: FavoritesStore<K>,
    last_issued: RequestSeq,
    in_flight: usize,

    tx: mpsc::Sender<FavoritesEvent>,
    rx: mpsc::Receiver<FavoritesEvent>,
}

impl<K: KeyValueStore> FavoritesKernel<K> {
    pub fn new(favorites: FavoritesStore<K>) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            store: FavoritesStateStore::default(),
            favorites,
            last_issued: RequestSeq::default(),
            in_flight: 0,
            tx,
            rx,
        }
    }

    pub fn store(&self) -> FavoritesStateStore {
        self.store.clone()
    }

    pub fn state(&self) -> FavoritesState {
        self.store.state()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn dispatch(&mut self, cmd: FavoritesCommand) {
        match cmd {
            FavoritesCommand::Focus => self.reload(),
        }
    }

    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.handle(ev);
        }
    }

    pub async fn next_event(&mut self) {
        if let Some(ev) = self.rx.recv().await {
            self.handle(ev);
        }
    }

    pub async fn settle(&mut self) {
        while self.is_busy() {
            self.next_event().await;
        }
    }

    fn handle(&mut self, ev: FavoritesEvent) {
        if let FavoritesEvent::Loaded { request, .. } = &ev {
            self.in_flight = self.in_flight.saturating_sub(1);
            if self.store.read(|s| s.latest_request) != Some(*request) {
                debug!("discarding stale favorites reload #{}", request.get());
                return;
            }
        }
        self.store.apply(ev);
    }

    fn reload(&mut self) {
        self.last_issued = self.last_issued.next();
        let request = self.last_issued;
        self.store.apply(FavoritesEvent::ReloadStarted { request });
        self.in_flight += 1;

        let favorites = self.favorites.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let favorites = favorites.list().await.unwrap_or_else(|e| {
                warn!("reading favorites failed, showing none: {}", e);
                Vec::new()
            });
            let _ = tx.send(FavoritesEvent::Loaded { request, favorites }).await;
        });
    }
}
