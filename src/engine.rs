//! Translation engine.
//!
//! Translating an input line is a short, one-directional pipeline:
//!
//! ```text
//! input ── split_passengers (splitter.rs)
//!            │  no separator: one segment
//!            │  separator:    N trimmed, non-empty segments
//!            v
//!          translate_entry (translator.rs)   one call per segment
//!            │  trim, empty -> ""
//!            v
//!          RuleTable::apply (table.rs)
//!            │  first matching rule wins
//!            │  Template -> expand back-references
//!            │  Compute  -> rules::compute (infant / child + age.rs)
//!            v
//!          SegmentOutcome ── continuation prefixes, join with '§'
//! ```
//!
//! ## Responsibilities by module
//!
//! - `table.rs`: the immutable `RuleTable` and the single action evaluator.
//! - `translator.rs`: single-entry translation and per-segment outcomes.
//! - `splitter.rs`: multi-passenger detection, splitting and recombination.
//! - `metrics.rs`: timings collected for verbose runs.
//!
//! ## Debugging
//!
//! Set `ABACUS_DEBUG_RULES=1` to print separator detection and rule matches.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/splitter.rs"]
mod splitter;
#[path = "engine/table.rs"]
mod table;
#[path = "engine/translator.rs"]
mod translator;

pub use metrics::RunMetrics;
pub(crate) use metrics::RunResult;
pub use table::RuleTable;
pub(crate) use translator::SegmentOutcome;

pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("ABACUS_DEBUG_RULES").is_some()
}
