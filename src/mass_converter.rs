//! Volume-to-mass conversion for baking mode.
//!
//! Converts cup, tablespoon and teaspoon amounts to grams for ingredients with
//! a known density. The scaled amount is converted, so the weight always
//! matches the quantity shown to the user.

use crate::density::{density_key, DensityTable};
use crate::ingredient_model::{MassEstimate, ParsedIngredientLine};
use crate::units::cups_per_unit;
use log::{debug, trace, warn};

/// Estimate the weight of a parsed line after scaling
///
/// Returns [`MassEstimate::NotApplicable`] when baking mode is off, the line has
/// no unit, or the unit is not a cup/spoon measure. Returns
/// [`MassEstimate::UnknownDensity`] when the unit converts but the ingredient
/// has no density entry, and [`MassEstimate::OutOfRange`] when the weight
/// cannot be represented in whole grams.
pub fn to_grams(
    parsed: &ParsedIngredientLine,
    scale_factor: f64,
    baking_mode: bool,
    densities: &DensityTable,
) -> MassEstimate {
    if !baking_mode || !parsed.has_unit() {
        return MassEstimate::NotApplicable;
    }

    let Some(cups_per) = cups_per_unit(&parsed.unit) else {
        trace!("Unit '{}' is not volumetric, skipping mass", parsed.unit);
        return MassEstimate::NotApplicable;
    };

    let key = density_key(&parsed.ingredient_name);
    let Some(grams_per_cup) = densities.grams_per_cup(&key) else {
        debug!("No density for '{}' (key '{}')", parsed.ingredient_name, key);
        return MassEstimate::UnknownDensity;
    };

    let cups = parsed.amount * cups_per;
    let grams = (cups * grams_per_cup * scale_factor).round();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if !grams.is_finite() || grams < 0.0 || grams >= u64::MAX as f64 {
        warn!(
            "Weight of '{}' is out of range: {} g",
            parsed.ingredient_name, grams
        );
        return MassEstimate::OutOfRange;
    }
    MassEstimate::Grams(grams as u64)
}
