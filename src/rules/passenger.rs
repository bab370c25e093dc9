//! Passenger name rules: infant and child records plus the plain `NM1` name
//! record that catches everything the special rules leave behind.

use regex::Captures;

use crate::age::resolve_age;
use crate::error::TranslateError;
use crate::{Context, Rule, RuleFlags};

/// `(INF<name/title>/<DDMMMYY>)` -> `-I/<name/title>*I<YY>`
///
/// Infants carry their birth-year digits, not a resolved age.
pub fn rule_infant() -> Rule {
    rule! {
        name: "infant",
        pattern: r"(?i)^\(INF(?<name_title>.*?)/(?<dob>[0-9]{2}[A-Z]{3}[0-9]{2})\)",
        action: compute!(Infant),
    }
}

/// `NM1<prefix><title> (CHD/<DDMMMYY>)` -> `-<prefix><title>*C<age>`
pub fn rule_child() -> Rule {
    rule! {
        name: "child",
        pattern: r"(?i)^NM1(?<prefix>.*?)(?<title>MSTR|MISS|MR|MS)\s*\(CHD/(?<dob>[0-9]{2}[A-Z]{3}[0-9]{2})\)",
        flags: RuleFlags::NEEDS_REFERENCE_DATE,
        action: compute!(Child),
    }
}

/// `NM1<rest>` -> `-<rest>`
pub fn rule_name_record() -> Rule {
    rule! {
        name: "NM1",
        pattern: r"(?i)^NM1(.*)",
        action: template!("-${1}"),
    }
}

pub(crate) fn infant(rule: &'static str, caps: &Captures<'_>) -> Result<String, TranslateError> {
    let (Some(name_title), Some(dob)) = (caps.name("name_title"), caps.name("dob")) else {
        return Err(malformed(rule, caps));
    };

    // The pattern restricts the token to ASCII digits at both ends.
    let dob = dob.as_str();
    let year_digits = &dob[dob.len() - 2..];

    Ok(format!("-I/{}*I{}", name_title.as_str().trim(), year_digits))
}

pub(crate) fn child(rule: &'static str, caps: &Captures<'_>, context: &Context) -> Result<String, TranslateError> {
    let (Some(prefix), Some(title), Some(dob)) = (caps.name("prefix"), caps.name("title"), caps.name("dob")) else {
        return Err(malformed(rule, caps));
    };
    let matched = matched_text(caps);

    let Some(departure) = context.departure_date else {
        return Err(TranslateError::MissingContext { rule, segment: matched });
    };

    let age = resolve_age(dob.as_str(), departure, context.current_year()).map_err(|source| {
        TranslateError::UnresolvableAge { rule, matched, dob: dob.as_str().to_string(), departure, source }
    })?;

    // Prefix keeps its spacing; only the matched span is rewritten.
    Ok(format!("-{}{}*C{}", prefix.as_str(), title.as_str(), age))
}

fn matched_text(caps: &Captures<'_>) -> String {
    caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default()
}

fn malformed(rule: &'static str, caps: &Captures<'_>) -> TranslateError {
    TranslateError::MalformedSpecialMatch { rule, matched: matched_text(caps) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn departure() -> Context {
        Context::default().with_departure(NaiveDate::from_ymd_opt(2024, 6, 1))
    }

    #[test]
    fn infant_handler_trims_name() {
        let rule = rule_infant();
        let caps = rule.pattern.captures("(INF KIM/BABY MISS /15MAR23)").unwrap();
        assert_eq!(infant(rule.name, &caps).unwrap(), "-I/KIM/BABY MISS*I23");
    }

    #[test]
    fn child_handler_keeps_prefix_spacing() {
        let rule = rule_child();
        let caps = rule.pattern.captures("NM1SMITH/JOHN MSTR (CHD/01JAN15)").unwrap();
        assert_eq!(child(rule.name, &caps, &departure()).unwrap(), "-SMITH/JOHN MSTR*C9");
    }

    #[test]
    fn child_handler_without_departure_reports_missing_context() {
        let rule = rule_child();
        let caps = rule.pattern.captures("NM1SMITH/JOHN MSTR (CHD/01JAN15)").unwrap();
        let err = child(rule.name, &caps, &Context::default()).unwrap_err();
        assert!(matches!(err, TranslateError::MissingContext { rule: "child", .. }));
    }

    #[test]
    fn child_pattern_accepts_every_title() {
        let rule = rule_child();
        for title in ["MR", "MS", "MISS", "MSTR", "mstr"] {
            let line = format!("NM1LEE/SORA {title}(CHD/10OCT18)");
            let caps = rule.pattern.captures(&line).unwrap();
            assert_eq!(&caps["title"], title);
        }
    }

    #[test]
    fn child_pattern_requires_child_marker() {
        assert!(!rule_child().pattern.is_match("NM1SMITH/JOHN MSTR"));
        assert!(!rule_child().pattern.is_match("NM1SMITH/JOHN MSTR (INF/01JAN15)"));
    }
}
