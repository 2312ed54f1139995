//! # Ingredient Data Model
//!
//! This module defines the data structures that flow through a scaling run:
//! the per-line parse result, the mass estimate, and the output record handed
//! back to the caller.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredientLine**: amount, optional unit and ingredient name read from one line
//! - **QuantityKind**: which numeric notation the amount was written in
//! - **MassEstimate**: grams, an unknown-density marker, or "not applicable"
//! - **ScaledResult**: display strings and mass for one surviving input line
//!
//! ## Usage
//!
//! ```rust
//! use recipe_scaler::ingredient_model::{MassEstimate, ParsedIngredientLine, QuantityKind};
//!
//! let flour = ParsedIngredientLine::new(2.25, "cups", "flour", QuantityKind::MixedNumber);
//! assert!(flour.has_unit());
//! assert_eq!(MassEstimate::Grams(270).to_string(), "270g");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Note shown in place of a weight when no density is known
pub const UNKNOWN_DENSITY_NOTE: &str = "(Add density for grams)";
/// Placeholder shown when no weight applies
pub const NOT_APPLICABLE_MARKER: &str = "-";
/// Note shown when the weight does not fit in whole grams
pub const OUT_OF_RANGE_NOTE: &str = "(Too large to weigh)";

/// Numeric notation the amount was written in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuantityKind {
    /// Whole number (e.g., "3 eggs")
    Integer,
    /// Decimal number (e.g., "1.5 cups")
    Decimal,
    /// Simple fraction (e.g., "1/2 tsp")
    Fraction,
    /// Whole number plus fraction (e.g., "2 1/4 cups")
    MixedNumber,
    /// Range collapsed to its midpoint (e.g., "2-3 cups")
    Range {
        /// Lower bound as written
        low: f64,
        /// Upper bound as written
        high: f64,
    },
}

impl QuantityKind {
    /// Whether the amount is an approximation of a written range
    pub fn is_range(&self) -> bool {
        matches!(self, QuantityKind::Range { .. })
    }
}

/// One ingredient line after parsing
///
/// `amount` is always finite and non-negative. Lines that cannot produce
/// such an amount are never turned into a `ParsedIngredientLine`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredientLine {
    /// Numeric amount; the midpoint when the source was a range
    pub amount: f64,

    /// Lowercase unit token, or empty for counted items ("2 eggs")
    pub unit: String,

    /// Lowercase, trimmed ingredient name (may be empty)
    pub ingredient_name: String,

    /// Notation the amount was written in
    pub quantity: QuantityKind,
}

impl ParsedIngredientLine {
    pub fn new(amount: f64, unit: &str, ingredient_name: &str, quantity: QuantityKind) -> Self {
        Self {
            amount,
            unit: unit.to_string(),
            ingredient_name: ingredient_name.to_string(),
            quantity,
        }
    }

    /// Whether a unit was recognized on this line
    pub fn has_unit(&self) -> bool {
        !self.unit.is_empty()
    }
}

/// Estimated weight for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "grams", rename_all = "snake_case")]
pub enum MassEstimate {
    /// Weight in whole grams, already scaled
    Grams(u64),
    /// Volumetric unit in baking mode, but no density entry for the ingredient
    UnknownDensity,
    /// Baking mode off, no unit, or a non-volumetric unit
    NotApplicable,
    /// Weight computed but larger than `u64::MAX` grams (or infinite)
    OutOfRange,
}

impl MassEstimate {
    pub fn grams(&self) -> Option<u64> {
        match self {
            MassEstimate::Grams(g) => Some(*g),
            _ => None,
        }
    }

    pub fn is_unknown_density(&self) -> bool {
        matches!(self, MassEstimate::UnknownDensity)
    }
}

impl fmt::Display for MassEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassEstimate::Grams(g) => write!(f, "{g}g"),
            MassEstimate::UnknownDensity => f.write_str(UNKNOWN_DENSITY_NOTE),
            MassEstimate::NotApplicable => f.write_str(NOT_APPLICABLE_MARKER),
            MassEstimate::OutOfRange => f.write_str(OUT_OF_RANGE_NOTE),
        }
    }
}

/// Output record for one surviving input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledResult {
    /// Ingredient name as parsed
    pub ingredient: String,

    /// Original amount with its unit, or with the ingredient when unitless
    pub original_display: String,

    /// Scaled amount in the same shape, rounded for display
    pub scaled_display: String,

    /// Unrounded scaled amount
    pub scaled_amount: f64,

    /// Unit token, empty for counted items
    pub unit: String,

    /// Estimated weight of the scaled amount
    pub mass: MassEstimate,
}

impl fmt::Display for ScaledResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({})",
            self.ingredient, self.original_display, self.scaled_display, self.mass
        )
    }
}
