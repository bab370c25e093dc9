//! Age resolution from compact `DDMMMYY` date-of-birth tokens.
//!
//! Two-digit years are anchored to the century of `current_year` and moved
//! back one century when that would land in the future. The heuristic has a
//! discontinuity at the boundary: with `current_year = 2026`, `26` resolves
//! to 2026 while `27` resolves to 1927.

use crate::error::AgeError;
use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = ["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];

/// Components of a `DDMMMYY` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOfBirth {
    pub day: u32,
    /// 1-based month.
    pub month: u32,
    /// Two-digit year, 0..=99.
    pub year_of_century: u32,
}

impl DateOfBirth {
    /// Parse `DDMMMYY`; the month abbreviation is matched case-insensitively.
    pub fn parse(token: &str) -> Result<Self, AgeError> {
        if token.len() != 7 || !token.is_ascii() {
            return Err(AgeError::Malformed(token.to_string()));
        }

        let (day, rest) = token.split_at(2);
        let (month, year) = rest.split_at(3);

        let day = two_digits(day).ok_or_else(|| AgeError::InvalidDay(day.to_string()))?;
        let month = MONTHS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(month))
            .map(|idx| idx as u32 + 1)
            .ok_or_else(|| AgeError::UnknownMonth(month.to_string()))?;
        let year_of_century = two_digits(year).ok_or_else(|| AgeError::InvalidYear(year.to_string()))?;

        Ok(DateOfBirth { day, month, year_of_century })
    }

    /// Four-digit birth year: the latest year ending in these two digits
    /// that is not after `current_year`.
    pub fn birth_year(&self, current_year: i32) -> i32 {
        let century = current_year.div_euclid(100) * 100;
        let year = century + self.year_of_century as i32;
        if year > current_year { year - 100 } else { year }
    }

    pub fn birth_date(&self, current_year: i32) -> Result<NaiveDate, AgeError> {
        let year = self.birth_year(current_year);
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or(AgeError::InvalidDate {
            year,
            month: self.month,
            day: self.day,
        })
    }
}

/// Whole years between the birth date encoded in `dob` and `reference`.
///
/// `current_year` is the clock reading used for century inference; see
/// [`DateOfBirth::birth_year`]. A birth date after `reference` yields a
/// negative age.
pub fn resolve_age(dob: &str, reference: NaiveDate, current_year: i32) -> Result<i32, AgeError> {
    let birth = DateOfBirth::parse(dob)?.birth_date(current_year)?;

    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }

    Ok(age)
}

fn two_digits(s: &str) -> Option<u32> {
    if s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()) { s.parse().ok() } else { None }
}
