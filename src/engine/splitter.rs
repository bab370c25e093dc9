//! Multi-passenger splitting and recombination.
//!
//! Stacked passenger records are separated in-band by a `1` that follows one
//! of the honorifics `MR`, `MS`, `MISS` or `MSTR`:
//!
//! ```text
//! NM1KIM/MINSU MR 1 KIM/JIWOO MS
//!                ^^^ separator (the honorific stays with its segment)
//! ```
//!
//! The honorific set is closed; other titles never split a line.

use std::time::Instant;

use super::debug_enabled;
use super::metrics::{RunMetrics, RunResult};
use super::table::RuleTable;
use super::translator::{SegmentOutcome, translate_entry};
use crate::Context;

pub(crate) const SEGMENT_SEPARATOR: &str = "§";

/// Leading characters that mark a continuation output as already prefixed.
const CONTINUATION_LEADERS: [char; 6] = ['-', '*', '0', '1', '9', 'W'];

/// Split `input` at every honorific-anchored `1`. Returns `None` when the
/// input holds no separator. Segments are returned untrimmed.
pub(crate) fn split_passengers(input: &str) -> Option<Vec<&str>> {
    let separator = regex!(r"(?i)(?:MR|MS|MISS|MSTR)(\s*1\s*)");

    let mut segments = Vec::new();
    let mut last = 0;
    for caps in separator.captures_iter(input) {
        let Some(sep) = caps.get(1) else {
            continue;
        };
        segments.push(&input[last..sep.start()]);
        last = sep.end();
    }

    if segments.is_empty() {
        return None;
    }

    segments.push(&input[last..]);
    Some(segments)
}

fn starts_with_name_record(input: &str) -> bool {
    input.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("NM1"))
}

pub(crate) fn run(table: &RuleTable, input: &str, context: &Context) -> RunResult {
    let start = Instant::now();
    let trimmed = input.trim();

    let split_start = Instant::now();
    let parts = split_passengers(trimmed);
    let split = split_start.elapsed();

    let multi_passenger = parts.is_some();
    let mut segments: Vec<SegmentOutcome> = match parts {
        Some(parts) => parts
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| translate_entry(table, part, context))
            .collect(),
        None if trimmed.is_empty() => Vec::new(),
        None => vec![translate_entry(table, trimmed, context)],
    };

    if debug_enabled() {
        eprintln!("[split] separator={} segments={}", multi_passenger, segments.len());
    }

    if multi_passenger && starts_with_name_record(trimmed) && segments.len() > 1 {
        for segment in segments.iter_mut().skip(1) {
            segment.mark_continuation(&CONTINUATION_LEADERS);
        }
    }

    let output = segments.iter().map(SegmentOutcome::render).collect::<Vec<_>>().join(SEGMENT_SEPARATOR);

    RunResult { segments, multi_passenger, output, metrics: RunMetrics { total: start.elapsed(), split } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FAILURE_MARKER, rules};
    use chrono::NaiveDate;

    fn table() -> RuleTable {
        RuleTable::new(rules::get())
    }

    fn departure() -> Context {
        Context::default().with_departure(NaiveDate::from_ymd_opt(2024, 6, 1))
    }

    #[test]
    fn no_separator_means_no_split() {
        assert_eq!(split_passengers("NM1SMITH/JOHN MR"), None);
        assert_eq!(split_passengers("AN20MAYICNNRT"), None);
        // A `1` that does not follow an honorific is not a separator.
        assert_eq!(split_passengers("NM1SMITH/JOHN DR 1 DOE/JANE MS"), None);
    }

    #[test]
    fn honorific_stays_with_its_segment() {
        assert_eq!(split_passengers("NM1KIM/MINSU MR 1 KIM/JIWOO MS"), Some(vec!["NM1KIM/MINSU MR", "KIM/JIWOO MS"]));
        assert_eq!(split_passengers("A/B MISS1C/D MSTR1E/F"), Some(vec!["A/B MISS", "C/D MSTR", "E/F"]));
    }

    #[test]
    fn separator_is_case_insensitive() {
        assert_eq!(split_passengers("nm1kim/minsu mr 1 lee/sora ms"), Some(vec!["nm1kim/minsu mr", "lee/sora ms"]));
    }

    #[test]
    fn two_passengers_joined_with_section_sign() {
        let out = run(&table(), "NM1SMITH/JOHN MR 1 DOE/JANE MS", &Context::default());
        assert!(out.multi_passenger);
        assert_eq!(out.segments.len(), 2);
        assert_eq!(out.output, "-SMITH/JOHN MR§-DOE/JANE MS");
    }

    #[test]
    fn continuation_dash_only_for_name_record_input() {
        let out = run(&table(), "SMITH/JOHN MR 1 DOE/JANE MS", &Context::default());
        assert_eq!(out.output, "SMITH/JOHN MR§DOE/JANE MS");
    }

    #[test]
    fn continuation_with_own_leader_is_not_prefixed_twice() {
        let out = run(&table(), "NM1A/B MR 1 NM1C/D MSTR (CHD/01JAN15)", &departure());
        assert_eq!(out.output, "-A/B MR§-C/D MSTR*C9");
    }

    #[test]
    fn failure_in_one_segment_keeps_the_others() {
        let out = run(&table(), "NM1A/B MR 1 NM1C/D MSTR (CHD/01JAN15)", &Context::default());
        let parts: Vec<&str> = out.output.split(SEGMENT_SEPARATOR).collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "-A/B MR");
        // Continuation failures get the same leading dash as any other output.
        assert!(parts[1].starts_with(&format!("-{FAILURE_MARKER}")), "{}", parts[1]);
        assert!(out.segments[1].is_failure());
    }

    #[test]
    fn empty_segments_are_dropped() {
        let out = run(&table(), "NM1A/B MR 1 ", &Context::default());
        assert!(out.multi_passenger);
        assert_eq!(out.segments.len(), 1);
        assert_eq!(out.output, "-A/B MR");
    }

    #[test]
    fn single_segment_after_split_gets_no_continuation_dash() {
        let out = run(&table(), "NM1A/B MR 1", &Context::default());
        assert_eq!(out.output, "-A/B MR");
    }

    #[test]
    fn three_passengers_in_order() {
        let out = run(&table(), "NM1A/B MR 1 C/D MS 1 E/F MISS", &Context::default());
        assert_eq!(out.output, "-A/B MR§-C/D MS§-E/F MISS");
    }

    #[test]
    fn blank_input_yields_empty_output() {
        let out = run(&table(), "   ", &Context::default());
        assert!(out.segments.is_empty());
        assert_eq!(out.output, "");
    }

    #[test]
    fn single_line_is_translated_whole() {
        let out = run(&table(), "  FXB  ", &Context::default());
        assert!(!out.multi_passenger);
        assert_eq!(out.output, "WPNCB");
    }
}
