//! Numeric token extraction from free-form input lines

use lazy_static::lazy_static;
use regex::Regex;

use super::error::ConvertError;

lazy_static! {
    /// Optional minus, digits, optional decimal point with trailing digits.
    /// Matches every number in "10x20x5", "12.5 cm" or "-3 and 4".
    static ref NUMBER_PATTERN: Regex = Regex::new(r"-?\d+\.?\d*").unwrap();

    /// A single Unicode decimal digit (general category Nd)
    static ref DIGIT: Regex = Regex::new(r"^\d$").unwrap();
}

fn is_decimal_digit(ch: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT.is_match(ch.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit.
///
/// Nd digits are encoded in contiguous runs of complete 0..=9 blocks, so the
/// offset from the start of the run, modulo 10, is the digit's value.
fn digit_value(ch: char) -> Option<u32> {
    if let Some(d) = ch.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(ch) {
        return None;
    }
    let mut start = ch as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((ch as u32 - start) % 10)
}

/// Parse a token matched by the numeric pattern, accepting any script's
/// decimal digits (`１０`, `٣٠`) as well as ASCII.
pub fn parse_number(token: &str) -> Result<f64, ConvertError> {
    let malformed = || ConvertError::MalformedNumber {
        literal: token.to_string(),
    };
    let ascii = token
        .chars()
        .map(|ch| match ch {
            '-' | '.' => Some(ch),
            _ => digit_value(ch).and_then(|d| char::from_digit(d, 10)),
        })
        .collect::<Option<String>>()
        .ok_or_else(malformed)?;
    ascii.parse::<f64>().map_err(|_| malformed())
}

/// Extract every numeric token from `input`, left to right.
///
/// Separators between numbers (`x`, whitespace, unit text) are ignored.
/// An input without numbers yields an empty vector, not an error; callers
/// decide whether that is acceptable.
pub fn extract_numbers(input: &str) -> Result<Vec<f64>, ConvertError> {
    NUMBER_PATTERN
        .find_iter(input)
        .map(|m| parse_number(m.as_str()))
        .collect()
}

/// Extract numbers, treating an empty result as [`ConvertError::NoNumbers`].
pub fn require_numbers(input: &str) -> Result<Vec<f64>, ConvertError> {
    let numbers = extract_numbers(input)?;
    if numbers.is_empty() {
        return Err(ConvertError::NoNumbers);
    }
    Ok(numbers)
}
