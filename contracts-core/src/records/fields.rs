//! Shared helpers for decoding the fields of a persisted line.

use std::str::FromStr;

use crate::ParseError;

pub(crate) fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    fields.next().ok_or(ParseError::MissingField(name))
}

pub(crate) fn parse_integer<N: FromStr>(field: &'static str, value: &str) -> Result<N, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

pub(crate) fn parse_number(field: &'static str, value: &str) -> Result<f64, ParseError> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(ParseError::InvalidNumber {
            field,
            value: value.to_string(),
        }),
    }
}

pub(crate) fn parse_flag(field: &'static str, value: &str) -> Result<bool, ParseError> {
    match value.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ParseError::InvalidFlag {
            field,
            value: value.to_string(),
        }),
    }
}

pub(crate) fn parse_variant<E: FromStr>(field: &'static str, value: &str) -> Result<E, ParseError> {
    value.parse().map_err(|_| ParseError::UnknownVariant {
        field,
        value: value.to_string(),
    })
}

pub(crate) fn ensure_exhausted<'a>(
    mut fields: impl Iterator<Item = &'a str>,
) -> Result<(), ParseError> {
    match fields.next() {
        Some(extra) => Err(ParseError::TrailingData(extra.to_string())),
        None => Ok(()),
    }
}

pub(crate) fn non_empty(line: &str) -> Result<&str, ParseError> {
    if line.trim().is_empty() {
        Err(ParseError::Empty)
    } else {
        Ok(line)
    }
}
