//! # Quantity Scaler Module
//!
//! Multiplies parsed amounts by the serving ratio and formats them for display.
//! Rounding happens only in [`format_amount`]; downstream mass conversion
//! always works on the unrounded value.

use crate::scale_config::{DEFAULT_DISPLAY_PRECISION, MAX_DISPLAY_PRECISION};
use crate::scale_errors::ScaleError;

/// Ratio `desired / original` applied to every quantity of a recipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Build the factor from serving counts; both must be positive
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_scaler::scaler::ScaleFactor;
    ///
    /// let factor = ScaleFactor::from_servings(4, 6).unwrap();
    /// assert_eq!(factor.value(), 1.5);
    /// assert!(ScaleFactor::from_servings(0, 6).is_err());
    /// ```
    pub fn from_servings(original: u32, desired: u32) -> Result<Self, ScaleError> {
        if original == 0 || desired == 0 {
            return Err(ScaleError::InvalidServings { original, desired });
        }
        Ok(Self(f64::from(desired) / f64::from(original)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Scale an amount: `amount * factor`
pub fn scale(amount: f64, factor: f64) -> f64 {
    amount * factor
}

/// Format an amount with the default two-decimal display precision
pub fn format_amount(value: f64) -> String {
    format_amount_with_precision(value, DEFAULT_DISPLAY_PRECISION)
}

/// Round to `precision` decimals and drop trailing zeros ("2", "2.5", "0.33")
///
/// Halves round away from zero, not to even. `precision` is capped at
/// [`MAX_DISPLAY_PRECISION`].
pub fn format_amount_with_precision(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_DISPLAY_PRECISION);
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    let formatted = format!("{rounded:.precision$}");
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
