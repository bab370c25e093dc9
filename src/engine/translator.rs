//! Single-entry translation.

use std::time::{Duration, Instant};

use super::table::RuleTable;
use crate::Context;
use crate::error::TranslateError;

/// Translation of one segment. Failures stay structured until `render`.
#[derive(Debug, Clone)]
pub(crate) struct SegmentOutcome {
    /// Trimmed segment text.
    pub input: String,
    /// Matching rule, `None` for pass-through and empty input.
    pub rule: Option<&'static str>,
    pub result: Result<String, TranslateError>,
    /// Set on continuation segments whose rendering needs a leading `-`.
    pub dash: bool,
    pub elapsed: Duration,
}

impl SegmentOutcome {
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    pub fn render(&self) -> String {
        let text = self.text();
        if self.dash { format!("-{text}") } else { text }
    }

    fn text(&self) -> String {
        match &self.result {
            Ok(output) => output.clone(),
            Err(err) => err.to_string(),
        }
    }

    /// Prefix the rendered output with `-` unless it already starts with one
    /// of `leaders`. Applies to failure messages as well.
    pub fn mark_continuation(&mut self, leaders: &[char]) {
        self.dash = !self.text().starts_with(leaders);
    }
}

pub(crate) fn translate_entry(table: &RuleTable, entry: &str, context: &Context) -> SegmentOutcome {
    let start = Instant::now();
    let trimmed = entry.trim();

    if trimmed.is_empty() {
        return SegmentOutcome {
            input: String::new(),
            rule: None,
            result: Ok(String::new()),
            dash: false,
            elapsed: start.elapsed(),
        };
    }

    let (rule, result) = match table.apply(trimmed, context) {
        Ok(applied) => (applied.rule, Ok(applied.output)),
        Err(err) => (Some(err.rule()), Err(err)),
    };

    SegmentOutcome { input: trimmed.to_string(), rule, result, dash: false, elapsed: start.elapsed() }
}
