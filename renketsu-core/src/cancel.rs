//! Cooperative cancellation for long-running computations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag polled by batch workers and the merge reduction.
///
/// Cloning the token shares the underlying flag, so a surrounding
/// orchestration layer can keep one handle and cancel a computation that
/// received another. Workers check the flag once per node and finish the
/// current node's edges before honouring it; the merge checks it once per
/// recursive step.
///
/// # Examples
/// ```
/// use renketsu_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(token.is_running());
/// handle.cancel();
/// assert!(!token.is_running());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    running: Arc<AtomicBool>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    /// Creates a token in the running state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Requests cooperative termination.
    pub fn cancel(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Returns whether the computation should keep running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}
