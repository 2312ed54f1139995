//! # Density Table Module
//!
//! Ingredient densities in grams per US cup, used to estimate the weight of
//! volumetric ingredients in baking mode. Teaspoon and tablespoon amounts are
//! converted to cups first (see [`crate::units`]).
//!
//! Default values are USDA figures for common baking ingredients.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical key every "...purpose flour" spelling folds to
pub const ALL_PURPOSE_FLOUR: &str = "all-purpose flour";

/// Default densities: ingredient name -> grams per US cup
pub const DEFAULT_DENSITIES: &[(&str, f64)] = &[
    (ALL_PURPOSE_FLOUR, 120.0),
    ("granulated sugar", 200.0),
    ("brown sugar", 220.0),
    ("powdered sugar", 120.0),
    ("butter", 227.0),
    ("vegetable oil", 216.0),
    ("olive oil", 216.0),
    ("cocoa powder", 82.0),
    ("baking powder", 192.0),
    ("baking soda", 288.0),
    ("salt", 292.0),
    ("milk", 244.0),
    ("water", 237.0),
    ("heavy cream", 238.0),
    ("sour cream", 240.0),
    ("eggs", 243.0), // ~4 large eggs per cup
    ("honey", 336.0),
    ("maple syrup", 312.0),
    ("cornstarch", 120.0),
    ("oats", 80.0),
];

/// Process-wide default table, for callers that do not inject their own
pub static DEFAULT_DENSITY_TABLE: LazyLock<DensityTable> = LazyLock::new(DensityTable::default);

/// Immutable mapping from normalized ingredient name to grams per cup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "HashMap<String, f64>")]
pub struct DensityTable {
    grams_per_cup: HashMap<String, f64>,
}

impl DensityTable {
    /// Build a table from `(name, grams per cup)` pairs
    ///
    /// Names are normalized with [`density_key`]. Entries whose density is
    /// not a positive finite number are ignored.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let grams_per_cup = entries
            .into_iter()
            .filter(|(_, density)| density.is_finite() && *density > 0.0)
            .map(|(name, density)| (density_key(name.as_ref()), density))
            .collect();
        Self { grams_per_cup }
    }

    /// Return a copy of this table with `other`'s entries added on top
    ///
    /// Entries in `other` replace existing entries with the same key.
    pub fn merged_with(&self, other: &DensityTable) -> Self {
        let mut grams_per_cup = self.grams_per_cup.clone();
        grams_per_cup.extend(other.grams_per_cup.iter().map(|(k, v)| (k.clone(), *v)));
        Self { grams_per_cup }
    }

    /// Grams per cup for an ingredient name, after normalization
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_scaler::density::DensityTable;
    ///
    /// let table = DensityTable::default();
    /// assert_eq!(table.grams_per_cup("All Purpose Flour"), Some(120.0));
    /// assert_eq!(table.grams_per_cup("unicorn dust"), None);
    /// ```
    pub fn grams_per_cup(&self, ingredient_name: &str) -> Option<f64> {
        self.grams_per_cup.get(&density_key(ingredient_name)).copied()
    }

    pub fn len(&self) -> usize {
        self.grams_per_cup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams_per_cup.is_empty()
    }
}

impl Default for DensityTable {
    fn default() -> Self {
        Self::new(DEFAULT_DENSITIES.iter().copied())
    }
}

impl From<HashMap<String, f64>> for DensityTable {
    fn from(entries: HashMap<String, f64>) -> Self {
        Self::new(entries)
    }
}

/// Normalize an ingredient name into a density lookup key
///
/// Lowercases and trims the name. Any name containing "purpose flour" folds to
/// "all-purpose flour"; this is a deliberate heuristic and no other aliases are
/// inferred.
pub fn density_key(ingredient_name: &str) -> String {
    let key = ingredient_name.trim().to_lowercase();
    if key.contains("purpose flour") {
        ALL_PURPOSE_FLOUR.to_string()
    } else {
        key
    }
}
