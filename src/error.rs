//! Failure values for age resolution and rule application.
//!
//! Nothing here is ever thrown past a segment boundary: a failing segment
//! renders its error through `Display`, and every rendering starts with
//! [`FAILURE_MARKER`] so callers can tell failures apart by their leading text.

use chrono::NaiveDate;
use std::fmt;

/// Leading word of every rendered failure.
pub const FAILURE_MARKER: &str = "ERROR:";

/// Why a `DDMMMYY` token could not be turned into an age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    /// Not exactly seven ASCII characters.
    Malformed(String),
    /// Day component is not two digits.
    InvalidDay(String),
    /// Month component is not one of the twelve English abbreviations.
    UnknownMonth(String),
    /// Year component is not two digits.
    InvalidYear(String),
    /// Components parsed but do not form a calendar date (e.g. 31 FEB).
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl fmt::Display for AgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeError::Malformed(token) => write!(f, "'{token}' is not a DDMMMYY token"),
            AgeError::InvalidDay(day) => write!(f, "invalid day '{day}'"),
            AgeError::UnknownMonth(month) => write!(f, "unknown month '{month}'"),
            AgeError::InvalidYear(year) => write!(f, "invalid year '{year}'"),
            AgeError::InvalidDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a calendar date")
            }
        }
    }
}

impl std::error::Error for AgeError {}

/// A segment-level translation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The matched rule needs a departure date and none was supplied.
    MissingContext { rule: &'static str, segment: String },
    /// The child rule matched but the age could not be computed.
    UnresolvableAge { rule: &'static str, matched: String, dob: String, departure: NaiveDate, source: AgeError },
    /// A special rule matched but a named capture was missing.
    MalformedSpecialMatch { rule: &'static str, matched: String },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::MissingContext { rule, segment } => {
                write!(f, "{FAILURE_MARKER} departure date required to apply rule '{rule}' to '{segment}'")
            }
            TranslateError::UnresolvableAge { matched, dob, departure, source, .. } => write!(
                f,
                "{FAILURE_MARKER} cannot compute age ({matched}, DOB: {dob}, Dep: {departure}): {source}"
            ),
            TranslateError::MalformedSpecialMatch { rule, matched } => {
                write!(f, "{FAILURE_MARKER} rule '{rule}' matched '{matched}' but its captures are incomplete")
            }
        }
    }
}

impl TranslateError {
    /// Name of the rule whose application failed.
    pub fn rule(&self) -> &'static str {
        match self {
            TranslateError::MissingContext { rule, .. }
            | TranslateError::UnresolvableAge { rule, .. }
            | TranslateError::MalformedSpecialMatch { rule, .. } => rule,
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::UnresolvableAge { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_starts_with_the_marker() {
        let departure = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let errors = vec![
            TranslateError::MissingContext { rule: "child", segment: "NM1A/B MSTR (CHD/01JAN15)".into() },
            TranslateError::UnresolvableAge {
                rule: "child",
                matched: "NM1A/B MSTR (CHD/31FEB15)".into(),
                dob: "31FEB15".into(),
                departure,
                source: AgeError::InvalidDate { year: 2015, month: 2, day: 31 },
            },
            TranslateError::MalformedSpecialMatch { rule: "infant", matched: "(INF/01JAN20)".into() },
        ];

        for err in errors {
            assert!(err.to_string().starts_with(FAILURE_MARKER), "{err}");
        }
    }

    #[test]
    fn unresolvable_age_names_token_and_departure() {
        let err = TranslateError::UnresolvableAge {
            rule: "child",
            matched: "NM1A/B MSTR (CHD/01XYZ15)".into(),
            dob: "01XYZ15".into(),
            departure: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            source: AgeError::UnknownMonth("XYZ".into()),
        };

        let text = err.to_string();
        assert!(text.contains("DOB: 01XYZ15"));
        assert!(text.contains("Dep: 2024-06-01"));
        assert!(text.ends_with("unknown month 'XYZ'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
