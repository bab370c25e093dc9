//! Service, itinerary and ticketing code rules.
//!
//! Whole-line codes are anchored at both ends; prefix codes keep the rest of
//! the line verbatim through `${n}` back-references.

use crate::Rule;

/// `AN<x>/A<y>` -> `1<x>¤<y>` (availability with airline qualifier)
pub fn rule_availability_with_airline() -> Rule {
    rule! {
        name: "AN/A",
        pattern: r"(?i)^AN(.*)/A(.*)",
        action: template!("1${1}¤${2}"),
    }
}

/// `RT/<text>` -> `*- <text>`
pub fn rule_retrieve_with_text() -> Rule {
    rule! {
        name: "RT/text",
        pattern: r"(?i)^RT/(.*)",
        action: template!("*- ${1}"),
    }
}

/// `RT` or `RT/` -> `*`
pub fn rule_retrieve() -> Rule {
    rule! {
        name: "RT",
        pattern: r"(?i)^RT/?$",
        action: template!("*"),
    }
}

pub fn rule_ape() -> Rule {
    rule! {
        name: "APE",
        pattern: r"(?i)^APE$",
        action: template!("9E*"),
    }
}

pub fn rule_apm_sel() -> Rule {
    rule! {
        name: "APM-SEL",
        pattern: r"(?i)^APM-SEL$",
        action: template!("9T*"),
    }
}

pub fn rule_fxb() -> Rule {
    rule! {
        name: "FXB",
        pattern: r"(?i)^FXB$",
        action: template!("WPNCB"),
    }
}

pub fn rule_fxp_ru() -> Rule {
    rule! {
        name: "FXP/R,U",
        pattern: r"(?i)^FXP/R,U$",
        action: template!("WPA"),
    }
}

pub fn rule_end_and_retrieve() -> Rule {
    rule! {
        name: "ER",
        pattern: r"(?i)^ER$",
        action: template!("*RR"),
    }
}

pub fn rule_split() -> Rule {
    rule! {
        name: "SP",
        pattern: r"(?i)^SP$",
        action: template!("D"),
    }
}

/// `AN<rest>` -> `1<rest>`
pub fn rule_availability() -> Rule {
    rule! {
        name: "AN",
        pattern: r"(?i)^AN(.*)",
        action: template!("1${1}"),
    }
}

/// `SS<rest>` -> `0<rest>`
pub fn rule_sell() -> Rule {
    rule! {
        name: "SS",
        pattern: r"(?i)^SS(.*)",
        action: template!("0${1}"),
    }
}
