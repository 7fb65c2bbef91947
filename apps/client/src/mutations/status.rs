use std::sync::Arc;

use tokio::sync::watch;

/// In-flight tracking for one kind of mutation, used to disable resubmission.
///
/// Counts calls rather than holding a flag, so two overlapping submissions
/// keep the mutation pending until both finish. Clones share the count.
#[derive(Clone)]
pub struct MutationStatus {
    in_flight: Arc<watch::Sender<usize>>,
}

impl Default for MutationStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl MutationStatus {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            in_flight: Arc::new(tx),
        }
    }

    pub fn is_pending(&self) -> bool {
        *self.in_flight.borrow() > 0
    }

    /// Receiver of the number of calls in flight.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.in_flight.subscribe()
    }

    /// Marks one call in flight until the guard is dropped.
    pub(crate) fn begin(&self) -> PendingGuard {
        self.in_flight.send_modify(|n| *n += 1);
        PendingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

pub(crate) struct PendingGuard {
    in_flight: Arc<watch::Sender<usize>>,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.in_flight.send_modify(|n| *n = n.saturating_sub(1));
    }
}
