//! Celsius to Fahrenheit conversion for single values and ranges
//!
//! Accepted shapes: `36.6`, `100°C`, `20-25`, `20~25°C`, `-5 - -10 C`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::error::ConvertError;
use super::extract::parse_number;
use super::rule::{ConversionRule, Rounding};
use super::units::{celsius_rule, CELSIUS_OFFSET, CELSIUS_SCALE};

lazy_static! {
    /// start, optional `-`/`~` separator, optional end, optional `°C` suffix
    static ref RANGE_PATTERN: Regex =
        Regex::new(r"^(-?\d+\.?\d*)\s*(-|~)?\s*(-?\d+\.?\d*)?\s*°?[Cc]?$").unwrap();
}

/// Temperature output policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TempFormat {
    /// Whole degrees, ties to even: `212°F`, `68~77°F`
    #[default]
    Rounded,
    /// Two decimals: `97.88°F`, `68.00~77.00°F`
    Fixed,
}

impl TempFormat {
    fn rounding(self) -> Rounding {
        match self {
            TempFormat::Rounded => Rounding::NearestInteger,
            TempFormat::Fixed => Rounding::TwoDecimalPlaces,
        }
    }
}

/// A parsed Celsius value or inclusive range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelsiusRange {
    pub start: f64,
    pub end: f64,
}

impl CelsiusRange {
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }
}

/// Parse a single Celsius value or a `-`/`~` separated range.
pub fn parse_celsius(input: &str) -> Result<CelsiusRange, ConvertError> {
    let trimmed = input.trim();
    let invalid = || ConvertError::InvalidTemperatureFormat {
        input: trimmed.to_string(),
    };

    let caps = RANGE_PATTERN.captures(trimmed).ok_or_else(invalid)?;
    let start = parse_number(&caps[1])?;
    let end = match caps.get(3) {
        Some(m) => parse_number(m.as_str())?,
        None => start,
    };
    Ok(CelsiusRange { start, end })
}

/// Celsius to Fahrenheit converter with a fixed output policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureConverter {
    rule: ConversionRule,
}

impl TemperatureConverter {
    pub fn new(format: TempFormat) -> Self {
        Self {
            rule: celsius_rule().with_rounding(format.rounding()),
        }
    }

    /// Unrounded Fahrenheit value of `celsius`
    pub fn to_fahrenheit(celsius: f64) -> f64 {
        celsius * CELSIUS_SCALE + CELSIUS_OFFSET
    }

    /// Convert a parsed range and render it, e.g. `68~77°F`.
    pub fn render(&self, range: CelsiusRange) -> Result<String, ConvertError> {
        let converted = self.rule.apply(&[range.start, range.end])?;
        let rounding = self.rule.rounding;
        let unit = self.rule.target_unit;
        let rendered = if range.is_single() {
            format!("{}{}", rounding.render(converted[0]), unit)
        } else {
            format!(
                "{}~{}{}",
                rounding.render(converted[0]),
                rounding.render(converted[1]),
                unit
            )
        };
        debug!(start = range.start, end = range.end, %rendered, "converted temperature");
        Ok(rendered)
    }

    /// Parse free text and render the Fahrenheit value or range.
    pub fn convert(&self, input: &str) -> Result<String, ConvertError> {
        self.render(parse_celsius(input)?)
    }
}

impl Default for TemperatureConverter {
    fn default() -> Self {
        Self::new(TempFormat::default())
    }
}
