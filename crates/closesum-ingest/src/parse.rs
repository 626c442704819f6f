//! Pipe-delimited closing record parsing.
//!
//! A record is one line of a snapshot file:
//!
//! ```text
//! 2024-01-05|...|...|ACME|...|...|...|105.250|...|100.000
//! ```
//!
//! Fields are addressed by position:
//! - field 0: record date
//! - field 3: security name
//! - field 7: closing price
//! - field 9: reference price
//!
//! The change is `field 7 - field 9`.

use closesum_types::Observation;

/// Field separator of snapshot records.
pub const FIELD_SEPARATOR: char = '|';

/// Position of the record date.
pub const DATE_FIELD: usize = 0;

/// Position of the security name.
pub const SECURITY_FIELD: usize = 3;

/// Position of the closing price.
pub const CLOSE_FIELD: usize = 7;

/// Position of the reference price the change is measured against.
pub const REFERENCE_FIELD: usize = 9;

/// Converts a numeric field to `f64`.
///
/// Surrounding whitespace is ignored and a blank field counts as zero.
/// A missing or non-numeric field yields NaN rather than an error, so
/// the record still reaches the report.
///
/// Accepted forms are decimal literals with an optional sign and
/// exponent, `Infinity` with an optional sign, and unsigned `0x`, `0o`
/// and `0b` integers. Spellings such as `inf` or `nan` are not numbers.
#[must_use]
pub fn parse_number(field: Option<&str>) -> f64 {
    let Some(field) = field else {
        return f64::NAN;
    };
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    parse_radix_integer(trimmed)
        .or_else(|| parse_infinity(trimmed))
        .or_else(|| parse_decimal(trimmed))
        .unwrap_or(f64::NAN)
}

fn parse_radix_integer(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

fn parse_infinity(text: &str) -> Option<f64> {
    match text {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    let is_literal = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_literal {
        return None;
    }
    text.parse().ok()
}

/// Parses a single record into an observation.
///
/// Short records are not rejected: missing text fields become empty
/// strings and a missing price makes the change NaN.
#[must_use]
pub fn parse_record(line: &str) -> Observation {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let text = |idx: usize| fields.get(idx).copied().unwrap_or_default();

    let close = parse_number(fields.get(CLOSE_FIELD).copied());
    let reference = parse_number(fields.get(REFERENCE_FIELD).copied());

    Observation::new(text(DATE_FIELD), text(SECURITY_FIELD), close - reference)
}

/// Parses every non-empty line of a snapshot file, in order.
///
/// A trailing carriage return is stripped from each line first.
pub fn parse_snapshot(text: &str) -> impl Iterator<Item = Observation> + '_ {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(parse_record)
}
