//! Converter module - numeric extraction, conversion rules and the unit table

pub mod error;
pub mod extract;
pub mod rule;
pub mod temperature;
pub mod units;

pub use error::ConvertError;
pub use extract::*;
pub use rule::*;
pub use temperature::*;
pub use units::*;
