//! Error types for numeric extraction and unit conversion.
//!
//! Every variant is recoverable at the prompt that produced it: the session
//! prints the variant's message and asks again without changing state.

use thiserror::Error;

/// Errors raised while turning a line of user text into converted values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The input line contained no numeric token at all.
    #[error("Invalid input. Please enter numeric values.")]
    NoNumbers,

    /// A rule was built with a zero divisor.
    ///
    /// The fixed unit table never produces one, but rules can be constructed
    /// directly through the library API.
    #[error("Error: Conversion factor should not be zero.")]
    ZeroFactor,

    /// A token matched the numeric pattern but could not be parsed as `f64`.
    #[error("Invalid input. '{literal}' is not a numeric value.")]
    MalformedNumber {
        /// Offending token as typed
        literal: String,
    },

    /// A value is too large to convert to a finite result.
    #[error("Error: Value is too large to convert.")]
    OutOfRange,

    /// Temperature input did not match the single value / range shape.
    #[error("Invalid input format. Please enter a valid temperature range.")]
    InvalidTemperatureFormat {
        /// Trimmed input line
        input: String,
    },
}
