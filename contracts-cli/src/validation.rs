//! Field checks applied to interactive input before it reaches a record.

use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

use contracts_core::Date;
use regex::Regex;
use thiserror::Error;
use time::Month;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.(\d{4})$").unwrap()
});

#[derive(Error, Debug, PartialEq)]
pub enum NumberError {
    #[error("the field cannot be empty")]
    Empty,
    #[error("'{0}' is not a valid number")]
    NotANumber(String),
    #[error("the number must be between {min} and {max}")]
    OutOfRange { min: String, max: String },
}

/// Names of people, companies and managers: letters (Latin or Cyrillic), spaces and `-.,_`.
pub fn is_alpha_text(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphabetic()
                || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
                || matches!(c, ' ' | '-' | '.' | ',' | '_')
        })
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '+' | '-'))
}

/// Logins end up in a space-separated file, so only `[A-Za-z0-9_-]` is allowed.
pub fn is_login(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Passwords share the space-separated users file with logins, so whitespace is rejected.
pub fn is_password(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(char::is_whitespace)
}

/// Free text must not contain the field delimiter of the pipe-separated files.
pub fn is_free_text(value: &str) -> bool {
    !value.is_empty() && !value.contains('|')
}

/// Parses `DD.MM.YYYY`, accepting only days that exist in the calendar.
pub fn parse_date(value: &str) -> Option<Date> {
    let captures = DATE_PATTERN.captures(value)?;
    let day: u8 = captures[1].parse().ok()?;
    let month: u8 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;

    time::Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()?;
    Some(Date::new(day, month, year))
}

/// Parses the whole of `value` as a number inside `range`.
pub fn parse_in_range<N>(value: &str, range: RangeInclusive<N>) -> Result<N, NumberError>
where
    N: FromStr + PartialOrd + ToString,
{
    let value = value.trim();
    if value.is_empty() {
        return Err(NumberError::Empty);
    }
    let number: N = value
        .parse()
        .map_err(|_| NumberError::NotANumber(value.to_string()))?;
    if !range.contains(&number) {
        return Err(NumberError::OutOfRange {
            min: range.start().to_string(),
            max: range.end().to_string(),
        });
    }
    Ok(number)
}
