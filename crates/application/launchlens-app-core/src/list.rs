use std::sync::Arc;

use launchlens_infra::LaunchSource;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app_core::{ListCommand, ListEvent, ListStore};
use crate::debounce::Debouncer;
use crate::domain::{FetchTarget, ListConfig, ListState, RequestSeq};

/// Orchestrates the launch list screen: initial load, debounced search,
/// pull-to-refresh and retry.
///
/// Work is spawned on the ambient tokio runtime; results come back as
/// [`ListEvent`]s and are applied by [`tick`](Self::tick) or
/// [`next_event`](Self::next_event). A fetch result is only applied when it
/// belongs to the most recently issued request.
pub struct LaunchListKernel<S> {
    store: ListStore,
    source: Arc<S>,
    config: ListConfig,
    debouncer: Debouncer,
    last_issued: RequestSeq,
    in_flight: usize,

    tx: mpsc::Sender<ListEvent>,
    rx: mpsc::Receiver<ListEvent>,
}

impl<S> LaunchListKernel<S>
where
    S: LaunchSource + 'static,
{
    pub fn new(source: Arc<S>, config: ListConfig) -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self {
            store: ListStore::default(),
            source,
            debouncer: Debouncer::new(config.debounce),
            config,
            last_issued: RequestSeq::default(),
            in_flight: 0,
            tx,
            rx,
        }
    }

    pub fn store(&self) -> ListStore {
        self.store.clone()
    }

    pub fn state(&self) -> ListState {
        self.store.state()
    }

    /// True while a fetch is outstanding or a debounced search is pending.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0 || self.debouncer.is_pending()
    }

    pub fn dispatch(&mut self, cmd: ListCommand) {
        match cmd {
            ListCommand::Activate => self.start_fetch(FetchTarget::Upcoming, false),

            ListCommand::QueryChanged(query) => {
                if self.store.read(|s| s.search_query == query) {
                    debug!("query {:?} unchanged, nothing scheduled", query);
                    return;
                }
                self.store.apply(ListEvent::QueryEdited(query.clone()));
                self.debouncer
                    .schedule(self.tx.clone(), move |ticket| ListEvent::DebounceElapsed {
                        ticket,
                        query,
                    });
            }

            ListCommand::Refresh => {
                self.debouncer.cancel();
                self.store.apply(ListEvent::QueryEdited(String::new()));
                self.start_fetch(FetchTarget::Upcoming, true);
            }

            ListCommand::Retry => {
                let (has_error, target) = self
                    .store
                    .read(|s| (s.error.is_some(), s.last_target.clone()));
                if !has_error {
                    debug!("retry ignored: nothing failed");
                    return;
                }
                self.start_fetch(target.unwrap_or(FetchTarget::Upcoming), false);
            }
        }
    }

    /// Apply every event that is already waiting, without blocking.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.handle(ev);
        }
    }

    /// Wait for the next event and apply it.
    pub async fn next_event(&mut self) {
        if let Some(ev) = self.rx.recv().await {
            self.handle(ev);
        }
    }

    /// Keep applying events until no fetch or debounce is outstanding.
    pub async fn settle(&mut self) {
        while self.is_busy() {
            self.next_event().await;
        }
    }

    fn handle(&mut self, ev: ListEvent) {
        if let ListEvent::DebounceElapsed { ticket, query } = &ev {
            if !self.debouncer.accept(*ticket) {
                debug!("superseded debounce for {:?} dropped", query);
                return;
            }
            let target = FetchTarget::for_query(query);
            self.start_fetch(target, false);
            return;
        }

        if let Some(request) = ev.completion_of() {
            self.in_flight = self.in_flight.saturating_sub(1);
            let latest = self.store.read(|s| s.latest_request);
            if latest != Some(request) {
                debug!(
                    "discarding stale list result #{} (latest #{:?})",
                    request.get(),
                    latest.map(RequestSeq::get)
                );
                return;
            }
        }

        self.store.apply(ev);
    }

    fn start_fetch(&mut self, target: FetchTarget, refreshing: bool) {
        self.last_issued = self.last_issued.next();
        let request = self.last_issued;
        self.store.apply(ListEvent::FetchStarted {
            request,
            target: target.clone(),
            refreshing,
        });
        self.in_flight += 1;

        let source = self.source.clone();
        let tx = self.tx.clone();
        let limit = self.config.page_limit;
        tokio::spawn(async move {
            let res = match &target {
                FetchTarget::Upcoming => {
                    source
                        .list_upcoming(limit, launchlens_config::DEFAULT_PAGE_OFFSET)
                        .await
                }
                FetchTarget::Search(query) => source.search(query, limit).await,
            };

            let ev = match res {
                Ok(page) => {
                    debug!(
                        "list fetch #{} ({:?}) returned {} launches",
                        request.get(),
                        target,
                        page.results.len()
                    );
                    ListEvent::FetchSucceeded { request, page }
                }
                Err(e) => {
                    warn!("list fetch #{} ({:?}) failed: {}", request.get(), target, e);
                    ListEvent::FetchFailed {
                        request,
                        message: launchlens_config::LIST_LOAD_FAILED.to_string(),
                    }
                }
            };
            let _ = tx.send(ev).await;
        });
    }
}
