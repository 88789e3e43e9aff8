//! Builder utilities for configuring the component computation.
//!
//! Validation happens at [`RenketsuBuilder::build`] time so a constructed
//! [`Renketsu`] always holds usable parameters and a ready worker pool.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::cancel::CancellationToken;
use crate::error::{Result, WccError};
use crate::progress::{LogProgress, ProgressSink};
use crate::renketsu::Renketsu;

/// Default number of batch workers when the caller does not choose one.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Default lower bound on nodes per batch; below this, per-task overhead
/// outweighs the parallelism.
pub const DEFAULT_MIN_BATCH_SIZE: usize = 10_000;

/// Configures and constructs [`Renketsu`] instances.
///
/// # Examples
/// ```
/// use renketsu_core::RenketsuBuilder;
///
/// let renketsu = RenketsuBuilder::new()
///     .with_concurrency(2)
///     .with_min_batch_size(100)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(renketsu.concurrency().get(), 2);
/// assert_eq!(renketsu.min_batch_size().get(), 100);
/// ```
#[derive(Clone)]
pub struct RenketsuBuilder {
    concurrency: usize,
    min_batch_size: usize,
    threshold: Option<f64>,
    cancel: Option<CancellationToken>,
    progress: Option<Arc<dyn ProgressSink>>,
}

impl Default for RenketsuBuilder {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            min_batch_size: DEFAULT_MIN_BATCH_SIZE,
            threshold: None,
            cancel: None,
            progress: None,
        }
    }
}

impl RenketsuBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of concurrent batch workers.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Returns the configured concurrency.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Overrides the minimum number of nodes per batch.
    #[must_use]
    pub fn with_min_batch_size(mut self, min_batch_size: usize) -> Self {
        self.min_batch_size = min_batch_size;
        self
    }

    /// Returns the configured minimum batch size.
    #[must_use]
    pub fn min_batch_size(&self) -> usize {
        self.min_batch_size
    }

    /// Restricts unions to edges whose weight strictly exceeds `threshold`.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Returns the configured weight threshold, if any.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Shares a cancellation token with the constructed instance.
    ///
    /// Keep a clone to request cooperative termination while
    /// [`Renketsu::run`] is blocked in another thread.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Overrides the advisory progress sink.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Validates the configuration, builds the bounded worker pool, and
    /// constructs a [`Renketsu`] instance.
    ///
    /// # Errors
    /// Returns [`WccError::InvalidConcurrency`] or
    /// [`WccError::InvalidBatchSize`] for zero parameters,
    /// [`WccError::InvalidThreshold`] for a non-finite threshold, and
    /// [`WccError::Scheduler`] when the worker pool cannot be constructed.
    pub fn build(self) -> Result<Renketsu> {
        let concurrency =
            NonZeroUsize::new(self.concurrency).ok_or(WccError::InvalidConcurrency {
                got: self.concurrency,
            })?;
        let min_batch_size =
            NonZeroUsize::new(self.min_batch_size).ok_or(WccError::InvalidBatchSize {
                got: self.min_batch_size,
            })?;
        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() {
                return Err(WccError::InvalidThreshold { got: threshold });
            }
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(concurrency.get())
            .build()
            .map_err(|error| WccError::Scheduler {
                message: Arc::from(error.to_string()),
            })?;

        Ok(Renketsu::new(
            concurrency,
            min_batch_size,
            self.threshold,
            pool,
            self.cancel.unwrap_or_default(),
            self.progress.unwrap_or_else(|| Arc::new(LogProgress)),
        ))
    }
}
