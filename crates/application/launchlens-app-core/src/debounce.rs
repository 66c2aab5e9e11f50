use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Identifies one scheduled firing. A ticket stays current until the next
/// `schedule`/`cancel` or until it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Single-slot timer: scheduling replaces whatever was pending.
pub struct Debouncer {
    window: Duration,
    generation: u64,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending: None,
        }
    }

    /// Cancel the pending timer, then send `make(ticket)` on `tx` once the
    /// window elapses without another call. Must run inside a tokio runtime.
    pub fn schedule<T, F>(&mut self, tx: mpsc::Sender<T>, make: F) -> DebounceTicket
    where
        T: Send + 'static,
        F: FnOnce(DebounceTicket) -> T + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let ticket = DebounceTicket(self.generation);
        let window = self.window;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(window) => {
                    let _ = tx.send(make(ticket)).await;
                }
            }
        });
        ticket
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Claim a fired ticket. Returns false when a later schedule or a cancel
    /// superseded it after it fired.
    pub fn accept(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending.is_some() && ticket.0 == self.generation {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
