//! The fixed table of supported unit pairs

use std::fmt;

use super::rule::{ConversionRule, Rounding};

pub const CM_PER_INCH: f64 = 2.54;
pub const MM_PER_INCH: f64 = 25.4;
pub const GRAMS_PER_POUND: f64 = 453.6;
pub const KILOGRAMS_PER_POUND: f64 = 0.4536;

/// °F per °C
pub const CELSIUS_SCALE: f64 = 9.0 / 5.0;
pub const CELSIUS_OFFSET: f64 = 32.0;

/// Category of a linear unit, selecting its submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Weight,
}

/// A source unit converted with a linear rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinearUnit {
    Centimeters,
    Millimeters,
    Grams,
    Kilograms,
}

impl LinearUnit {
    pub const ALL: [LinearUnit; 4] = [
        LinearUnit::Centimeters,
        LinearUnit::Millimeters,
        LinearUnit::Grams,
        LinearUnit::Kilograms,
    ];

    pub fn category(self) -> Category {
        match self {
            LinearUnit::Centimeters | LinearUnit::Millimeters => Category::Length,
            LinearUnit::Grams | LinearUnit::Kilograms => Category::Weight,
        }
    }

    /// Label shown in the input prompt
    pub fn label(self) -> &'static str {
        match self {
            LinearUnit::Centimeters => "CM",
            LinearUnit::Millimeters => "MM",
            LinearUnit::Grams => "Grams",
            LinearUnit::Kilograms => "Kilograms",
        }
    }

    pub fn rule(self) -> ConversionRule {
        match self {
            LinearUnit::Centimeters => ConversionRule::linear(CM_PER_INCH, "in"),
            LinearUnit::Millimeters => ConversionRule::linear(MM_PER_INCH, "in"),
            LinearUnit::Grams => ConversionRule::linear(GRAMS_PER_POUND, "lbs"),
            LinearUnit::Kilograms => ConversionRule::linear(KILOGRAMS_PER_POUND, "lbs"),
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Celsius to Fahrenheit, rounded to whole degrees
pub fn celsius_rule() -> ConversionRule {
    ConversionRule::affine(
        CELSIUS_SCALE,
        CELSIUS_OFFSET,
        "°F",
        Rounding::NearestInteger,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(LinearUnit::Centimeters.category(), Category::Length);
        assert_eq!(LinearUnit::Millimeters.category(), Category::Length);
        assert_eq!(LinearUnit::Grams.category(), Category::Weight);
        assert_eq!(LinearUnit::Kilograms.category(), Category::Weight);
    }

    #[test]
    fn test_every_factor_is_positive() {
        for unit in LinearUnit::ALL {
            assert!(unit.rule().factor > 0.0, "{} has a non-positive factor", unit);
        }
    }

    #[test]
    fn test_kilograms_to_pounds() {
        let rule = LinearUnit::Kilograms.rule();
        assert_eq!(rule.convert_and_format(&[1.0]).unwrap(), "2.2 lbs");
    }

    #[test]
    fn test_millimeters_to_inches() {
        let rule = LinearUnit::Millimeters.rule();
        assert_eq!(rule.convert_and_format(&[25.4]).unwrap(), "1.0 in");
    }
}
