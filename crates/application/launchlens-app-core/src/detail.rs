use std::sync::Arc;

use launchlens_infra::LaunchSource;
use launchlens_persistence::{FavoritesStore, KeyValueStore};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app_core::{DetailCommand, DetailEvent, DetailStore};
use crate::domain::{DetailState, RequestSeq};

/// Orchestrates the launch detail screen: one record fetch, an independent
/// favorites membership check, and optimistic favorite toggling.
pub struct LaunchDetailKernel<S, K> {
    store: DetailStore,
    source: Arc<S>,
    favorites: FavoritesStore<K>,
    last_issued: RequestSeq,
    in_flight: usize,

    tx: mpsc::Sender<DetailEvent>,
    rx: mpsc::Receiver<DetailEvent>,
}

impl<S, K> LaunchDetailKernel<S, K>
where
    S: LaunchSource + 'static,
    K: KeyValueStore,
{
    pub fn new(source: Arc<S>, favorites: FavoritesStore<K>) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            store: DetailStore::default(),
            source,
            favorites,
            last_issued: RequestSeq::default(),
            in_flight: 0,
            tx,
            rx,
        }
    }

    pub fn store(&self) -> DetailStore {
        self.store.clone()
    }

    pub fn state(&self) -> DetailState {
        self.store.state()
    }

    /// True while a fetch, membership check or favorite write is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn dispatch(&mut self, cmd: DetailCommand) {
        match cmd {
            DetailCommand::Activate(id) => self.load(id),

            DetailCommand::Retry => match self.store.read(|s| s.launch_id.clone()) {
                Some(id) => self.load(id),
                None => debug!("retry ignored: no launch selected"),
            },

            DetailCommand::ToggleFavorite => self.toggle_favorite(),
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

    fn handle(&mut self, ev: DetailEvent) {
        if matches!(ev, DetailEvent::FavoriteWriteFinished) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        if let Some(request) = ev.completion_of() {
            self.in_flight = self.in_flight.saturating_sub(1);
            let latest = self.store.read(|s| s.latest_request);
            if latest != Some(request) {
                debug!("discarding stale detail result #{}", request.get());
                return;
            }
        }

        self.store.apply(ev);
    }

    fn load(&mut self, id: String) {
        self.last_issued = self.last_issued.next();
        let request = self.last_issued;
        self.store.apply(DetailEvent::LoadStarted {
            request,
            id: id.clone(),
        });
        self.in_flight += 2;

        let source = self.source.clone();
        let tx = self.tx.clone();
        let fetch_id = id.clone();
        tokio::spawn(async move {
            let ev = match source.get_by_id(&fetch_id).await {
                Ok(launch) => DetailEvent::LaunchLoaded { request, launch },
                Err(e) => {
                    warn!("detail fetch for {} failed: {}", fetch_id, e);
                    DetailEvent::LoadFailed {
                        request,
                        message: launchlens_config::DETAIL_LOAD_FAILED.to_string(),
                    }
                }
            };
            let _ = tx.send(ev).await;
        });

        let favorites = self.favorites.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let favorited = match favorites.contains(&id).await {
                Ok(found) => found,
                Err(e) => {
                    warn!("favorite lookup for {} failed, assuming not favorited: {}", id, e);
                    false
                }
            };
            let _ = tx
                .send(DetailEvent::MembershipResolved { request, favorited })
                .await;
        });
    }

    fn toggle_favorite(&mut self) {
        let (launch, was_favorited) = self.store.read(|s| {
            let launch = s.launch.clone().filter(|_| s.can_toggle_favorite());
            (launch, s.favorited)
        });
        let Some(launch) = launch else {
            debug!("toggle ignored: launch or favorite membership not loaded yet");
            return;
        };

        let favorited = !was_favorited;
        self.store.apply(DetailEvent::FavoriteToggled { favorited });
        self.in_flight += 1;

        // No rollback: a failed write leaves the optimistic flag in place.
        let favorites = self.favorites.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let res = if favorited {
                favorites.add(&launch).await
            } else {
                favorites.remove(launch.id.as_str()).await
            };
            if let Err(e) = res {
                warn!("persisting favorite state for {} failed: {}", launch.id, e);
            }
            let _ = tx.send(DetailEvent::FavoriteWriteFinished).await;
        });
    }
}
