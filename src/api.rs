use crate::engine::{RuleTable, RunMetrics, RunResult, SegmentOutcome};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_TABLE: Lazy<RuleTable> = Lazy::new(|| RuleTable::new(crate::rules::get()));

/// Translation context.
///
/// Holds the departure date used by age-dependent rules and the clock
/// reading used to infer the century of two-digit birth years.
#[derive(Debug, Clone)]
pub struct Context {
    /// Departure date; `None` is a distinct state, never defaulted.
    pub departure_date: Option<NaiveDate>,
    /// Today's date, consulted only for century inference.
    pub today: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { departure_date: None, today: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap() }
        } else {
            Self { departure_date: None, today: Local::now().date_naive() }
        }
    }
}

impl Context {
    /// Context with the given departure date and the current clock.
    pub fn new(departure_date: Option<NaiveDate>) -> Self {
        Self { departure_date, ..Self::default() }
    }

    pub fn with_departure(mut self, departure_date: Option<NaiveDate>) -> Self {
        self.departure_date = departure_date;
        self
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }
}

/// Per-segment detail of a [`Translation`].
#[derive(Debug, Clone)]
pub struct SegmentReport {
    /// Trimmed segment text.
    pub input: String,
    /// Name of the rule that handled the segment, `None` for pass-through.
    pub rule: Option<String>,
    /// Rendered output (a failure message when `failed`).
    pub output: String,
    pub failed: bool,
    pub elapsed: Duration,
}

/// Result from [`translate_verbose_with`].
#[derive(Debug, Clone)]
pub struct Translation {
    /// The input text as given.
    pub text: String,
    /// Rendered output, identical to what [`translate_with`] returns.
    pub output: String,
    pub segments: Vec<SegmentReport>,
    /// Whether the in-band passenger separator was detected.
    pub multi_passenger: bool,
    pub metrics: RunMetrics,
}

impl Translation {
    pub(crate) fn from_run(text: &str, run: RunResult) -> Self {
        Translation {
            text: text.to_string(),
            output: run.output,
            segments: run.segments.iter().map(segment_to_report).collect(),
            multi_passenger: run.multi_passenger,
            metrics: run.metrics,
        }
    }

    /// True when at least one segment failed to translate.
    pub fn has_failures(&self) -> bool {
        self.segments.iter().any(|s| s.failed)
    }

    pub fn elapsed(&self) -> Duration {
        self.metrics.total
    }
}

/// The standard rule table, built once on first use.
pub fn default_table() -> &'static RuleTable {
    &DEFAULT_TABLE
}

/// Parse a departure date in `YYYY-MM-DD` form. Blank input means "no
/// departure date".
pub fn parse_departure_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map(Some)
}

/// Translate `input` with the standard rules and the current clock.
///
/// Failures are rendered inline and start with [`crate::FAILURE_MARKER`].
///
/// # Example
/// ```
/// use abacus_translator::translate;
///
/// assert_eq!(translate("FXP/R,U", None), "WPA");
/// ```
pub fn translate(input: &str, departure_date: Option<NaiveDate>) -> String {
    translate_with(input, &Context::new(departure_date))
}

/// Translate `input` with the standard rules and the provided `context`.
///
/// Use this when you want deterministic century inference by supplying
/// `Context::today`.
pub fn translate_with(input: &str, context: &Context) -> String {
    DEFAULT_TABLE.translate(input, context)
}

/// Translate one entry without multi-passenger splitting.
pub fn translate_one(entry: &str, departure_date: Option<NaiveDate>) -> String {
    DEFAULT_TABLE.translate_entry(entry, &Context::new(departure_date))
}

/// Translate `input` and return per-segment details and timings.
pub fn translate_verbose_with(input: &str, context: &Context) -> Translation {
    DEFAULT_TABLE.translate_verbose(input, context)
}

fn segment_to_report(outcome: &SegmentOutcome) -> SegmentReport {
    SegmentReport {
        input: outcome.input.clone(),
        rule: outcome.rule.map(str::to_string),
        output: outcome.render(),
        failed: outcome.is_failure(),
        elapsed: outcome.elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FAILURE_MARKER;

    fn reference_context() -> Context {
        Context { departure_date: NaiveDate::from_ymd_opt(2024, 6, 1), today: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap() }
    }

    #[test]
    fn translate_with_resolves_child_age() {
        let out = translate_with("NM1SMITH/JOHN MSTR (CHD/01JAN15)", &reference_context());
        assert_eq!(out, "-SMITH/JOHN MSTR*C9");
    }

    #[test]
    fn translate_without_departure_reports_missing_context() {
        let out = translate("NM1SMITH/JOHN MSTR (CHD/01JAN15)", None);
        assert!(out.starts_with(FAILURE_MARKER));
        assert!(out.contains("NM1SMITH/JOHN MSTR (CHD/01JAN15)"));
    }

    #[test]
    fn translate_one_skips_splitting() {
        assert_eq!(translate_one("NM1A/B MR 1 C/D MS", None), "-A/B MR 1 C/D MS");
        assert_eq!(translate_one("  ", None), "");
    }

    #[test]
    fn verbose_reports_segments_and_rules() {
        let res = translate_verbose_with("NM1A/B MR 1 C/D MSTR (CHD/01JAN15)", &reference_context());

        assert_eq!(res.text, "NM1A/B MR 1 C/D MSTR (CHD/01JAN15)");
        assert!(res.multi_passenger);
        assert!(!res.has_failures());
        assert_eq!(res.segments.len(), 2);
        assert_eq!(res.segments[0].rule.as_deref(), Some("NM1"));
        // The continuation lacks NM1, so the child rule cannot see it.
        assert_eq!(res.segments[1].rule, None);
        assert_eq!(res.output, "-A/B MR§-C/D MSTR (CHD/01JAN15)");
        assert!(res.metrics.split <= res.elapsed());
    }

    #[test]
    fn verbose_flags_failed_segments() {
        let ctx = Context { departure_date: None, ..reference_context() };
        let res = translate_verbose_with("NM1A/B MR 1 NM1C/D MSTR (CHD/01JAN15)", &ctx);
        assert!(res.has_failures());
        assert!(!res.segments[0].failed);
        assert!(res.segments[1].failed);
        assert_eq!(res.segments[1].rule.as_deref(), Some("child"));
    }

    #[test]
    fn departure_dates_parse_from_iso_form() {
        assert_eq!(parse_departure_date("2024-06-01").unwrap(), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(parse_departure_date("  ").unwrap(), None);
        assert!(parse_departure_date("01/06/2024").is_err());
        assert!(parse_departure_date("2024-02-30").is_err());
    }

    #[test]
    fn default_table_is_shared() {
        assert!(std::ptr::eq(default_table(), default_table()));
        assert_eq!(default_table().len(), 14);
    }
}
