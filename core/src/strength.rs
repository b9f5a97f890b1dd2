//! Password strength scoring.
//!
//! A password is checked against six criteria; the share of passed criteria
//! gives a percentage, and the percentage maps onto a [`StrengthCategory`]:
//! 100% is strong, 70% or more is medium, anything below is weak.

use lazy_regex::{lazy_regex, Lazy, Regex};
use strum::IntoEnumIterator as _;

// `.` without the line terminators, matching the browser form's rule
static RE_LENGTH: Lazy<Regex> = lazy_regex!(r"^[^\n\r\u{2028}\u{2029}]{8,20}$");
static RE_LOWERCASE: Lazy<Regex> = lazy_regex!(r"[a-z]");
static RE_UPPERCASE: Lazy<Regex> = lazy_regex!(r"[A-Z]");
static RE_DIGIT: Lazy<Regex> = lazy_regex!(r"[0-9]");
static RE_SPECIAL: Lazy<Regex> = lazy_regex!(r"[@#$%^&+=!?.]");

/// Compared against the lowercased password.
pub const COMMON_PASSWORDS: [&str; 5] = ["123456", "password", "12345678", "qwerty", "abc123"];

pub const SPECIAL_CHARS: &str = "@#$%^&+=!?.";

const STRONG_PERCENTAGE: u8 = 100;
const MEDIUM_PERCENTAGE: u8 = 70;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum StrengthCategory {
    Weak,
    Medium,
    Strong,
}

impl StrengthCategory {
    pub fn from_percentage(percentage: u8) -> Self {
        use StrengthCategory::*;
        if percentage >= STRONG_PERCENTAGE {
            Strong
        } else if percentage >= MEDIUM_PERCENTAGE {
            Medium
        } else {
            Weak
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Criterion {
    Length,
    Lowercase,
    Uppercase,
    Digit,
    Special,
    NotCommon,
}

impl Criterion {
    pub fn is_met_by(&self, password: &str) -> bool {
        use Criterion::*;
        match self {
            Length => RE_LENGTH.is_match(password),
            Lowercase => RE_LOWERCASE.is_match(password),
            Uppercase => RE_UPPERCASE.is_match(password),
            Digit => RE_DIGIT.is_match(password),
            Special => RE_SPECIAL.is_match(password),
            NotCommon => {
                let lower = password.to_lowercase();
                !COMMON_PASSWORDS.contains(&lower.as_str())
            }
        }
    }

    /// Rule text shown to the user.
    pub const fn rule(&self) -> &'static str {
        use Criterion::*;
        match self {
            Length => "8 to 20 characters",
            Lowercase => "at least one lowercase letter",
            Uppercase => "at least one uppercase letter",
            Digit => "at least one digit",
            Special => "at least one of @ # $ % ^ & + = ! ? .",
            NotCommon => "not a commonly used password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub passed: u8,
    pub percentage: u8,
    pub category: StrengthCategory,
}

pub fn criteria_count() -> u8 {
    Criterion::iter().count() as u8
}

/// round(passed / total * 100)
pub fn percentage_of(passed: u8) -> u8 {
    let ratio = f64::from(passed) / f64::from(criteria_count());
    (ratio * 100.0).round() as u8
}

pub fn evaluate(password: &str) -> Evaluation {
    let passed = Criterion::iter().filter(|c| c.is_met_by(password)).count() as u8;
    let percentage = self::percentage_of(passed);
    Evaluation {
        passed,
        percentage,
        category: StrengthCategory::from_percentage(percentage),
    }
}

pub fn score(password: &str) -> StrengthCategory {
    self::evaluate(password).category
}

/// Value of the live 0-100 indicator.
pub fn percentage(password: &str) -> u8 {
    self::evaluate(password).percentage
}

pub fn unmet_criteria(password: &str) -> Vec<Criterion> {
    Criterion::iter().filter(|c| !c.is_met_by(password)).collect()
}
