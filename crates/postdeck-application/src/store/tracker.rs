//! Loading flag and error slot shared by every operation of one store.

use postdeck_core::DashboardError;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Per-store operation bookkeeping.
///
/// Loading is tracked as a count of in-flight operations rather than a
/// single flag, so a fast call finishing early cannot clear `is_loading`
/// while a slower sibling is still waiting on the backend.
#[derive(Default)]
pub struct OperationTracker {
    in_flight: AtomicUsize,
    error: RwLock<Option<String>>,
}

impl OperationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an operation as started and clears the previous error.
    ///
    /// The operation counts as in flight until the returned guard is dropped.
    pub async fn begin(&self) -> OperationGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let guard = OperationGuard { tracker: self };
        *self.error.write().await = None;
        guard
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Human-readable message of the last failure, if any.
    pub async fn error(&self) -> Option<String> {
        self.error.read().await.clone()
    }

    pub async fn clear_error(&self) {
        *self.error.write().await = None;
    }

    /// Records a failed `action` (e.g. "fetch accounts") in the error slot.
    pub async fn record_failure(&self, action: &str, err: &DashboardError) {
        tracing::warn!(action, error = %err, "Backend call failed, serving fallback data");
        *self.error.write().await = Some(format!("Failed to {action}: {err}"));
    }
}

/// Keeps an operation counted as in flight; decrements on drop.
pub struct OperationGuard<'a> {
    tracker: &'a OperationTracker,
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.tracker.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
