//! # Recipe Scaling Pipeline
//!
//! Orchestrates a scaling run: split raw text into lines, parse each line,
//! scale the amount, estimate the weight, and emit one [`ScaledResult`] per
//! line that parsed. Lines that do not parse are skipped silently and never
//! abort the batch.
//!
//! ## Usage
//!
//! ```rust
//! use recipe_scaler::pipeline::scale_recipe;
//!
//! let results = scale_recipe("1 cup all-purpose flour\nMix well\n3 eggs", 2, 4, true)?;
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].scaled_display, "2 cup");
//! assert_eq!(results[0].mass.grams(), Some(240));
//! assert_eq!(results[1].scaled_display, "6 eggs");
//! # Ok::<(), recipe_scaler::scale_errors::ScaleError>(())
//! ```

use crate::density::{DensityTable, DEFAULT_DENSITY_TABLE};
use crate::ingredient_model::{ParsedIngredientLine, ScaledResult};
use crate::ingredient_parser::IngredientParser;
use crate::mass_converter::to_grams;
use crate::scale_config::ScalerConfig;
use crate::scale_errors::ScaleError;
use crate::scaler::{format_amount_with_precision, scale, ScaleFactor};
use crate::units::{UnitCatalog, DEFAULT_CATALOG};
use log::{debug, info, trace};
use std::sync::LazyLock;

/// Shared engine behind [`scale_recipe`], built on first use
static DEFAULT_SCALER: LazyLock<RecipeScaler> = LazyLock::new(RecipeScaler::new);

/// Scaling engine holding its injected tables and configuration
#[derive(Debug, Clone)]
pub struct RecipeScaler {
    parser: IngredientParser,
    densities: DensityTable,
    display_precision: usize,
}

impl RecipeScaler {
    /// Create a scaler with the default catalog, densities and configuration
    pub fn new() -> Self {
        Self::with_tables(
            DEFAULT_CATALOG.clone(),
            DEFAULT_DENSITY_TABLE.clone(),
            &ScalerConfig::default(),
        )
    }

    /// Create a scaler with injected tables
    pub fn with_tables(catalog: UnitCatalog, densities: DensityTable, config: &ScalerConfig) -> Self {
        debug!(
            "Creating RecipeScaler: {} densities, display_precision={}",
            densities.len(),
            config.display_precision
        );
        Self {
            parser: IngredientParser::with_config(catalog, config),
            densities,
            display_precision: config.display_precision,
        }
    }

    /// Create a scaler from a configuration, loading its density file if any
    pub fn from_config(config: &ScalerConfig) -> Result<Self, ScaleError> {
        let densities = config.density_table()?;
        Ok(Self::with_tables(DEFAULT_CATALOG.clone(), densities, config))
    }

    /// Scale every ingredient line of a recipe
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::EmptyRecipe`] for blank text and
    /// [`ScaleError::InvalidServings`] when either serving count is zero.
    /// Individual lines never cause an error.
    pub fn scale_recipe(
        &self,
        raw_text: &str,
        original_servings: u32,
        desired_servings: u32,
        baking_mode: bool,
    ) -> Result<Vec<ScaledResult>, ScaleError> {
        if raw_text.trim().is_empty() {
            return Err(ScaleError::EmptyRecipe);
        }
        let factor = ScaleFactor::from_servings(original_servings, desired_servings)?;

        debug!(
            "Scaling recipe with {} lines by {} (baking_mode={})",
            raw_text.lines().count(),
            factor.value(),
            baking_mode
        );

        let mut skipped = 0;
        let results: Vec<ScaledResult> = raw_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match self.parser.parse(line) {
                Some(parsed) => Some(self.scale_line(&parsed, factor, baking_mode)),
                None => {
                    debug!("Skipping unparseable line: '{}'", line);
                    skipped += 1;
                    None
                }
            })
            .collect();

        info!(
            "Scaled {} ingredient lines ({} skipped)",
            results.len(),
            skipped
        );
        Ok(results)
    }

    /// Build the result record for one parsed line
    pub fn scale_line(
        &self,
        parsed: &ParsedIngredientLine,
        factor: ScaleFactor,
        baking_mode: bool,
    ) -> ScaledResult {
        let scaled_amount = scale(parsed.amount, factor.value());
        let mass = to_grams(parsed, factor.value(), baking_mode, &self.densities);

        // Unitless lines read as "3 eggs"; others as "1 cup"
        let label = if parsed.has_unit() {
            &parsed.unit
        } else {
            &parsed.ingredient_name
        };
        let original_display = display(
            &format_amount_with_precision(parsed.amount, self.display_precision),
            label,
        );
        let scaled_display = display(
            &format_amount_with_precision(scaled_amount, self.display_precision),
            label,
        );

        trace!(
            "'{}': {} -> {} ({})",
            parsed.ingredient_name,
            original_display,
            scaled_display,
            mass
        );

        ScaledResult {
            ingredient: parsed.ingredient_name.clone(),
            original_display,
            scaled_display,
            scaled_amount,
            unit: parsed.unit.clone(),
            mass,
        }
    }
}

impl Default for RecipeScaler {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale a recipe with the default tables and configuration
pub fn scale_recipe(
    raw_text: &str,
    original_servings: u32,
    desired_servings: u32,
    baking_mode: bool,
) -> Result<Vec<ScaledResult>, ScaleError> {
    DEFAULT_SCALER.scale_recipe(raw_text, original_servings, desired_servings, baking_mode)
}

fn display(amount: &str, label: &str) -> String {
    if label.is_empty() {
        amount.to_string()
    } else {
        format!("{amount} {label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_model::MassEstimate;

    #[test]
    fn test_empty_recipe_rejected() {
        assert_eq!(scale_recipe("", 2, 4, false), Err(ScaleError::EmptyRecipe));
        assert_eq!(scale_recipe(" \n\t\n", 2, 4, false), Err(ScaleError::EmptyRecipe));
    }

    #[test]
    fn test_zero_servings_rejected() {
        assert_eq!(
            scale_recipe("1 cup sugar", 0, 4, false),
            Err(ScaleError::InvalidServings { original: 0, desired: 4 })
        );
        assert!(scale_recipe("1 cup sugar", 4, 0, false).is_err());
    }

    #[test]
    fn test_display_shapes() {
        let results = scale_recipe("1/2 tsp salt\n3 eggs\n4", 2, 3, false).unwrap();
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].original_display, "0.5 tsp");
        assert_eq!(results[0].scaled_display, "0.75 tsp");

        assert_eq!(results[1].original_display, "3 eggs");
        assert_eq!(results[1].scaled_display, "4.5 eggs");
        assert_eq!(results[1].unit, "");

        // No unit and no ingredient name: bare numbers
        assert_eq!(results[2].original_display, "4");
        assert_eq!(results[2].scaled_display, "6");
    }

    #[test]
    fn test_scaled_amount_is_unrounded() {
        let results = scale_recipe("1 cup milk", 3, 1, false).unwrap();
        assert_eq!(results[0].scaled_display, "0.33 cup");
        assert_eq!(results[0].scaled_amount, 1.0 / 3.0);
    }

    #[test]
    fn test_crlf_and_indentation() {
        let results = scale_recipe("  1 cup sugar\r\n\r\n  2 tbsp butter  \r\n", 1, 1, true).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].ingredient, "sugar");
        assert_eq!(results[1].ingredient, "butter");
        assert_eq!(results[1].mass, MassEstimate::Grams(28));
    }

    #[test]
    fn test_default_scaler_matches_fresh_engine() {
        let text = "2 1/4 cups all-purpose flour\n1 cup unicorn dust\n3 eggs";
        let shared = scale_recipe(text, 4, 6, true).unwrap();
        let fresh = RecipeScaler::with_tables(
            UnitCatalog::default(),
            DensityTable::default(),
            &ScalerConfig::default(),
        )
        .scale_recipe(text, 4, 6, true)
        .unwrap();
        assert_eq!(shared, fresh);
        assert_eq!(*DEFAULT_CATALOG, UnitCatalog::default());
        assert_eq!(*DEFAULT_DENSITY_TABLE, DensityTable::default());
    }

    #[test]
    fn test_injected_density_table() {
        let scaler = RecipeScaler::with_tables(
            UnitCatalog::default(),
            DensityTable::new([("unicorn dust", 50.0)]),
            &ScalerConfig::default(),
        );
        let results = scaler.scale_recipe("1 cup unicorn dust\n1 cup butter", 1, 2, true).unwrap();
        assert_eq!(results[0].mass, MassEstimate::Grams(100));
        assert_eq!(results[1].mass, MassEstimate::UnknownDensity);
    }

    #[test]
    fn test_display_precision_from_config() {
        let config = ScalerConfig {
            display_precision: 1,
            ..Default::default()
        };
        let scaler =
            RecipeScaler::with_tables(UnitCatalog::default(), DensityTable::default(), &config);
        let results = scaler.scale_recipe("1 cup milk", 3, 1, false).unwrap();
        assert_eq!(results[0].scaled_display, "0.3 cup");
    }
}
