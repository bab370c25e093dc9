//! The standard SELCONNECT -> ABACUS rule set.
//!
//! Order is load-bearing: the first matching rule wins, so every specific
//! pattern sits above the general one it would otherwise lose to
//! (`infant`/`child` above `NM1`, `AN/A` above `AN`, `RT/text` above `RT`).

pub mod codes;
pub mod passenger;


use regex::Captures;

use crate::error::TranslateError;
use crate::{Computation, Context, Rule};

use codes::*;
use passenger::*;

pub fn get() -> Vec<Rule> {
    vec![
        rule_infant(),
        rule_child(),
        rule_availability_with_airline(),
        rule_retrieve_with_text(),
        rule_retrieve(),
        rule_ape(),
        rule_apm_sel(),
        rule_fxb(),
        rule_fxp_ru(),
        rule_end_and_retrieve(),
        rule_split(),
        rule_availability(),
        rule_sell(),
        rule_name_record(),
    ]
}

/// Run the handler behind a `Computation` tag.
pub(crate) fn compute(
    computation: Computation,
    rule: &'static str,
    caps: &Captures<'_>,
    context: &Context,
) -> Result<String, TranslateError> {
    match computation {
        Computation::Infant => passenger::infant(rule, caps),
        Computation::Child => passenger::child(rule, caps, context),
    }
}
