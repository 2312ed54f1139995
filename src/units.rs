//! # Unit Catalog Module
//!
//! This module defines the set of unit spellings recognized after a quantity,
//! and the volume multipliers used to express spoon measures in US cups.
//!
//! ## Features
//!
//! - Volume, mass and informal units ("pinch", "dash") in singular and plural form
//! - Longest-first matching so "cups" is never cut short to "cup"
//! - Word-boundary check so "cupcakes" is not read as the unit "cup"
//! - Exact rational cup multipliers: 1 cup = 16 tbsp = 48 tsp

use std::sync::LazyLock;

/// Cups per teaspoon (1 cup = 48 tsp)
pub const CUPS_PER_TSP: f64 = 1.0 / 48.0;
/// Cups per tablespoon (1 cup = 16 tbsp)
pub const CUPS_PER_TBSP: f64 = 1.0 / 16.0;

/// Unit spellings recognized by the default catalog
pub const DEFAULT_UNITS: &[&str] = &[
    // Volume units
    "cup", "cups", "tsp", "teaspoon", "teaspoons", "tbsp", "tablespoon", "tablespoons",
    "ml", "l", "liter", "liters",
    // Weight units
    "g", "gram", "grams", "oz", "ounce", "ounces",
    // Informal units
    "pinch", "dash",
];

/// Process-wide default catalog, for callers that do not inject their own
pub static DEFAULT_CATALOG: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::default);

/// Immutable set of recognized unit tokens
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCatalog {
    /// Lowercase tokens sorted by descending length
    tokens: Vec<String>,
}

impl UnitCatalog {
    /// Build a catalog from a list of unit spellings
    ///
    /// Tokens are lowercased, deduplicated and sorted longest first. Ties are
    /// broken alphabetically so matching order never depends on input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_scaler::units::UnitCatalog;
    ///
    /// let catalog = UnitCatalog::new(["cup", "cups"]);
    /// assert_eq!(catalog.tokens()[0], "cups");
    /// ```
    pub fn new<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<String> = units
            .into_iter()
            .map(|u| u.as_ref().trim().to_lowercase())
            .filter(|u| !u.is_empty())
            .collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        tokens.dedup();
        Self { tokens }
    }

    /// Recognized tokens in matching order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Split a unit off the front of `text`
    ///
    /// Returns the lowercase unit token and the trimmed text that follows it,
    /// or `None` when no catalog entry starts `text` at a word boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_scaler::units::UnitCatalog;
    ///
    /// let catalog = UnitCatalog::default();
    /// assert_eq!(catalog.match_prefix("Cups flour"), Some(("cups", "flour")));
    /// assert_eq!(catalog.match_prefix("cupcakes"), None);
    /// ```
    pub fn match_prefix<'a>(&'a self, text: &'a str) -> Option<(&'a str, &'a str)> {
        self.tokens.iter().find_map(|token| {
            let head = text.get(..token.len())?;
            if !head.eq_ignore_ascii_case(token) {
                return None;
            }
            let rest = &text[token.len()..];
            match rest.chars().next() {
                Some(c) if c.is_alphabetic() => None,
                _ => Some((token.as_str(), rest.trim())),
            }
        })
    }

    /// Whether `unit` is one of the catalog's spellings
    pub fn contains(&self, unit: &str) -> bool {
        self.tokens.iter().any(|t| t.eq_ignore_ascii_case(unit))
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_UNITS.iter().copied())
    }
}

/// Cup-equivalent multiplier for a volumetric unit
///
/// A trailing "s" is stripped before the lookup, so plural spellings resolve
/// to the same multiplier. Returns `None` for mass, metric-volume and informal
/// units, which are not converted to grams.
pub fn cups_per_unit(unit: &str) -> Option<f64> {
    let unit = unit.trim().to_lowercase();
    let singular = unit.strip_suffix('s').unwrap_or(&unit);
    match singular {
        "cup" => Some(1.0),
        "tsp" | "teaspoon" => Some(CUPS_PER_TSP),
        "tbsp" | "tablespoon" => Some(CUPS_PER_TBSP),
        _ => None,
    }
}
