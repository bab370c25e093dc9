//! Engine run metrics.
//!
//! Timings are cheap to collect (a handful of `Instant` reads per run), so
//! every run records them; only the verbose API and the CLI report surface
//! them.

use super::translator::SegmentOutcome;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run (split + every segment + join).
    pub total: Duration,
    /// Time spent detecting the separator and splitting.
    pub split: Duration,
}

/// Splitter output bundled with timing information.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    /// Per-segment outcomes in input order.
    pub segments: Vec<SegmentOutcome>,
    /// Whether the in-band passenger separator was found.
    pub multi_passenger: bool,
    /// Rendered output, segments joined with `§`.
    pub output: String,
    pub metrics: RunMetrics,
}
