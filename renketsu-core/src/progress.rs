//! Advisory progress reporting.

/// Sink receiving coarse progress reports from batch workers.
///
/// Reports are advisory and must not affect correctness; workers emit one
/// per completed (or cancelled) batch with the fraction of the node range
/// covered so far.
pub trait ProgressSink: Send + Sync {
    /// Records that `fraction` (in `[0, 1]`) of the node range is done.
    fn log_progress(&self, fraction: f64);
}

/// Default sink reporting through `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn log_progress(&self, fraction: f64) {
        tracing::debug!(progress = fraction, "batch completed");
    }
}
