//! Conversion rules and the generic linear converter
//!
//! A [`ConversionRule`] is the single description of a unit pair: a factor,
//! a target label, how the factor is applied, and how results are rounded.
//! Length, weight and temperature all go through [`ConversionRule::apply`].

use tracing::debug;

use super::error::ConvertError;

/// How the factor is applied to a source value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleMode {
    /// `value / factor`
    Divide,
    /// `value * factor + offset`
    Affine { offset: f64 },
}

/// How converted values are cut down for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Cut off after two decimals, toward zero (`0.338` -> `0.33`)
    TruncateTwoDecimals,
    /// Nearest integer, ties to even (`36.5` -> `36`)
    NearestInteger,
    /// Two decimals fixed; the value is left intact and rounded when rendered
    TwoDecimalPlaces,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::TruncateTwoDecimals => (value * 100.0).trunc() / 100.0,
            Rounding::NearestInteger => value.round_ties_even(),
            Rounding::TwoDecimalPlaces => value,
        }
    }

    /// Render a value already passed through [`Rounding::apply`].
    pub fn render(self, value: f64) -> String {
        // -0.0 + 0.0 == +0.0
        let value = value + 0.0;
        match self {
            // shortest round-trip form: `4.0`, `0.33`, `3.937007874015748e19`
            Rounding::TruncateTwoDecimals => format!("{:?}", value),
            Rounding::NearestInteger => format!("{:.0}", value),
            Rounding::TwoDecimalPlaces => format!("{:.2}", value),
        }
    }
}

/// Immutable description of one source -> target unit pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRule {
    pub factor: f64,
    pub target_unit: &'static str,
    pub mode: RuleMode,
    pub rounding: Rounding,
}

impl ConversionRule {
    /// A rule dividing by `factor` and truncating to two decimals
    pub const fn linear(factor: f64, target_unit: &'static str) -> Self {
        Self {
            factor,
            target_unit,
            mode: RuleMode::Divide,
            rounding: Rounding::TruncateTwoDecimals,
        }
    }

    /// A rule computing `value * factor + offset`
    pub const fn affine(
        factor: f64,
        offset: f64,
        target_unit: &'static str,
        rounding: Rounding,
    ) -> Self {
        Self {
            factor,
            target_unit,
            mode: RuleMode::Affine { offset },
            rounding,
        }
    }

    pub fn with_rounding(self, rounding: Rounding) -> Self {
        Self { rounding, ..self }
    }

    /// Convert a single value, without rounding.
    pub fn convert_raw(&self, value: f64) -> Result<f64, ConvertError> {
        self.check()?;
        Ok(match self.mode {
            RuleMode::Divide => value / self.factor,
            RuleMode::Affine { offset } => value * self.factor + offset,
        })
    }

    /// A dividing rule must have a non-zero factor.
    pub fn check(&self) -> Result<(), ConvertError> {
        if self.mode == RuleMode::Divide && self.factor == 0.0 {
            debug!(target_unit = self.target_unit, "rejected zero conversion factor");
            return Err(ConvertError::ZeroFactor);
        }
        Ok(())
    }

    /// Convert every value in order, applying the rule's rounding.
    ///
    /// Fails as a whole if the rule cannot be applied or any result is not
    /// finite; no partial result is returned.
    pub fn apply(&self, values: &[f64]) -> Result<Vec<f64>, ConvertError> {
        self.check()?;
        let converted = values
            .iter()
            .map(|&v| {
                let c = self.rounding.apply(self.convert_raw(v)?);
                if !c.is_finite() {
                    debug!(input = v, unit = self.target_unit, "result out of range");
                    return Err(ConvertError::OutOfRange);
                }
                Ok(c)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            input = ?values,
            output = ?converted,
            unit = self.target_unit,
            "applied conversion rule"
        );
        Ok(converted)
    }

    /// Join converted values with `" x "` and append the target unit.
    pub fn format(&self, converted: &[f64]) -> String {
        let joined = converted
            .iter()
            .map(|&v| self.rounding.render(v))
            .collect::<Vec<_>>()
            .join(" x ");
        format!("{} {}", joined, self.target_unit)
    }

    /// Convert and render in one step.
    pub fn convert_and_format(&self, values: &[f64]) -> Result<String, ConvertError> {
        let converted = self.apply(values)?;
        Ok(self.format(&converted))
    }
}
