//! The rule table and its evaluator.
//!
//! ## Invariants
//!
//! - Rules are evaluated in the order they were given; first match wins.
//! - Every pattern is anchored at the start of the line.
//! - A rule flagged `NEEDS_REFERENCE_DATE` never runs its action without a
//!   departure date; the evaluator reports `MissingContext` instead.
//! - The table is never mutated after construction, so one instance can be
//!   shared by reference across threads.

use regex::Captures;

use super::debug_enabled;
use super::metrics::RunResult;
use super::splitter;
use super::translator::translate_entry;
use crate::api::Translation;
use crate::error::TranslateError;
use crate::{Action, Context, Rule, rules};

/// Result of applying the table to one trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Applied {
    /// Name of the matching rule, `None` for pass-through.
    pub rule: Option<&'static str>,
    pub output: String,
}

/// Ordered, immutable set of translation rules.
///
/// Obtain the standard table with [`crate::default_table`].
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub(crate) fn new(rules: Vec<Rule>) -> Self {
        RuleTable { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Translate a full input line, splitting stacked passenger records.
    pub fn translate(&self, input: &str, context: &Context) -> String {
        self.run(input, context).output
    }

    /// Like [`RuleTable::translate`] but keeps per-segment details.
    pub fn translate_verbose(&self, input: &str, context: &Context) -> Translation {
        Translation::from_run(input, self.run(input, context))
    }

    /// Translate a single entry without multi-passenger splitting.
    pub fn translate_entry(&self, entry: &str, context: &Context) -> String {
        translate_entry(self, entry, context).render()
    }

    pub(crate) fn run(&self, input: &str, context: &Context) -> RunResult {
        splitter::run(self, input, context)
    }

    /// Apply the first matching rule to `line` (already trimmed, non-empty).
    /// Unmatched lines pass through unchanged.
    pub(crate) fn apply(&self, line: &str, context: &Context) -> Result<Applied, TranslateError> {
        for rule in &self.rules {
            let Some(caps) = rule.pattern.captures(line) else {
                continue;
            };

            if debug_enabled() {
                eprintln!("[rule_match] {} <- {:?}", rule.name, line);
            }

            if rule.needs_reference_date() && context.departure_date.is_none() {
                return Err(TranslateError::MissingContext { rule: rule.name, segment: line.to_string() });
            }

            let output = match rule.action {
                Action::Template(template) => expand(&caps, template, line),
                Action::Compute(computation) => rules::compute(computation, rule.name, &caps, context)?,
            };

            return Ok(Applied { rule: Some(rule.name), output });
        }

        if debug_enabled() {
            eprintln!("[rule_match] <pass-through> <- {:?}", line);
        }

        Ok(Applied { rule: None, output: line.to_string() })
    }
}

/// Replace the matched span with the expanded template; text outside the
/// match is kept as-is.
fn expand(caps: &Captures<'_>, template: &str, line: &str) -> String {
    let mut out = String::with_capacity(line.len() + template.len());
    let Some(whole) = caps.get(0) else {
        caps.expand(template, &mut out);
        return out;
    };

    out.push_str(&line[..whole.start()]);
    caps.expand(template, &mut out);
    out.push_str(&line[whole.end()..]);
    out
}
