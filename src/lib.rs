use regex::Regex;

#[macro_use]
mod macros;
mod age;
mod api;
mod engine;
mod error;
mod rules;

pub use age::{DateOfBirth, resolve_age};
pub use api::{
    Context, SegmentReport, Translation, default_table, parse_departure_date, translate, translate_one,
    translate_verbose_with, translate_with,
};
pub use engine::{RuleTable, RunMetrics};
pub use error::{AgeError, FAILURE_MARKER, TranslateError};

// --- Internal types ---------------------------------------------------------

bitflags::bitflags! {
    /// Per-rule requirements checked by the evaluator before an action runs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct RuleFlags: u8 {
        /// The rule cannot produce output without a departure date.
        const NEEDS_REFERENCE_DATE = 1 << 0;
    }
}

/// Named stateful computations. The evaluator in `engine/table.rs` hands each
/// tag to `rules::compute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Computation {
    /// `(INF<name>/<DDMMMYY>)` -> `-I/<name>*I<YY>`
    Infant,
    /// `NM1<prefix><title> (CHD/<DDMMMYY>)` -> `-<prefix><title>*C<age>`
    Child,
}

/// What a rule does once its pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Substitution template; `${n}` refers to the nth capture group.
    Template(&'static str),
    /// Stateful handler that needs structured captures (and maybe a context).
    Compute(Computation),
}

/// A translation rule: a name, an anchored case-insensitive pattern, the
/// action to run on a match and the requirements declared through `flags`.
#[derive(Debug)]
pub(crate) struct Rule {
    pub name: &'static str,
    /// Stored as a static reference created via the `regex!` macro in
    /// `src/macros.rs`.
    pub pattern: &'static Regex,
    pub action: Action,
    pub flags: RuleFlags,
}

impl Rule {
    pub fn needs_reference_date(&self) -> bool {
        self.flags.contains(RuleFlags::NEEDS_REFERENCE_DATE)
    }
}
