//! Unicon: Unit Conversion Library
//!
//! Extracts numbers from free-form text and converts lengths (cm, mm) and
//! weights (g, kg) to inches and pounds, and Celsius values or ranges to
//! Fahrenheit, behind a nested interactive menu.

pub mod cli;
pub mod convert;
pub mod utils;
