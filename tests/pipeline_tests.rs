//! # Pipeline Integration Tests
//!
//! End-to-end scaling runs over realistic pasted recipes, covering baking mode,
//! skipped lines and the serving-count guards.

use recipe_scaler::density::DensityTable;
use recipe_scaler::ingredient_model::MassEstimate;
use recipe_scaler::pipeline::{scale_recipe, RecipeScaler};
use recipe_scaler::scale_config::ScalerConfig;
use recipe_scaler::scale_errors::ScaleError;
use recipe_scaler::units::UnitCatalog;

const COOKIES: &str = r#"
    Classic Chocolate Chip Cookies

    Ingredients:
    2 1/4 cups all-purpose flour
    1 teaspoon baking soda
    1 teaspoon salt
    1 cup butter
    3/4 cup granulated sugar
    3/4 cup brown sugar
    2 eggs
    2 teaspoons vanilla extract
    2 cups chocolate chips

    Instructions:
    Preheat oven to 375F
    "#;

#[test]
fn test_cookie_recipe_doubled_in_baking_mode() {
    let results = scale_recipe(COOKIES, 24, 48, true).unwrap();

    // Title, section headers and instructions are skipped
    assert_eq!(results.len(), 9);

    let flour = &results[0];
    assert_eq!(flour.ingredient, "all-purpose flour");
    assert_eq!(flour.original_display, "2.25 cups");
    assert_eq!(flour.scaled_display, "4.5 cups");
    assert_eq!(flour.mass, MassEstimate::Grams(540));

    // 1 tsp = 1/48 cup; 2 tsp x 288 g/cup / 48 = 12 g
    assert_eq!(results[1].ingredient, "baking soda");
    assert_eq!(results[1].mass, MassEstimate::Grams(12));

    assert_eq!(results[3].ingredient, "butter");
    assert_eq!(results[3].mass, MassEstimate::Grams(454));

    assert_eq!(results[4].scaled_display, "1.5 cup");
    assert_eq!(results[4].mass, MassEstimate::Grams(300));

    let eggs = &results[6];
    assert_eq!(eggs.original_display, "2 eggs");
    assert_eq!(eggs.scaled_display, "4 eggs");
    assert_eq!(eggs.mass, MassEstimate::NotApplicable);

    assert_eq!(results[7].ingredient, "vanilla extract");
    assert_eq!(results[7].mass, MassEstimate::UnknownDensity);
    assert_eq!(results[8].mass, MassEstimate::UnknownDensity);
}

#[test]
fn test_baking_mode_off_has_no_masses() {
    let results = scale_recipe(COOKIES, 24, 8, false).unwrap();
    assert_eq!(results.len(), 9);
    assert!(results.iter().all(|r| r.mass == MassEstimate::NotApplicable));
    assert_eq!(results[0].scaled_display, "0.75 cups");
    assert_eq!(results[1].scaled_display, "0.33 teaspoon");
}

#[test]
fn test_flour_mass_conversion() {
    let results = scale_recipe("1 cup all-purpose flour", 1, 2, true).unwrap();
    assert_eq!(results[0].scaled_amount, 2.0);
    assert_eq!(results[0].scaled_display, "2 cup");
    assert_eq!(results[0].mass, MassEstimate::Grams(240));
}

#[test]
fn test_unknown_density_does_not_fail_line() {
    let results = scale_recipe("1 cup unicorn dust\n1 cup milk", 2, 6, true).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].scaled_display, "3 cup");
    assert!(results[0].mass.is_unknown_density());
    assert_eq!(results[0].mass.to_string(), "(Add density for grams)");
    assert_eq!(results[1].mass, MassEstimate::Grams(732));
}

#[test]
fn test_unparseable_line_does_not_abort_batch() {
    let text = "1 cup sugar\nPreheat oven to 350F\n2 eggs";
    let results = scale_recipe(text, 1, 1, false).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].ingredient, "sugar");
    assert_eq!(results[1].ingredient, "eggs");
}

#[test]
fn test_only_unparseable_lines_yield_empty_result() {
    let results = scale_recipe("Mix well\nBake 20 minutes", 2, 4, true).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_scaling_by_one_is_identity() {
    let results = scale_recipe("2 1/4 cups sugar\n1/3 cup oil\n3 eggs", 4, 4, false).unwrap();
    for result in &results {
        assert_eq!(result.original_display, result.scaled_display);
    }
    assert_eq!(results[1].scaled_amount, 1.0 / 3.0);
}

#[test]
fn test_range_scales_from_midpoint() {
    let results = scale_recipe("2-3 cups water", 1, 2, true).unwrap();
    assert_eq!(results[0].original_display, "2.5 cups");
    assert_eq!(results[0].scaled_display, "5 cups");
    assert_eq!(results[0].mass, MassEstimate::Grams(1185));
}

#[test]
fn test_serving_guards() {
    assert_eq!(
        scale_recipe("1 cup sugar", 0, 2, true),
        Err(ScaleError::InvalidServings { original: 0, desired: 2 })
    );
    assert_eq!(
        scale_recipe("1 cup sugar", 2, 0, true),
        Err(ScaleError::InvalidServings { original: 2, desired: 0 })
    );
    assert_eq!(scale_recipe("   ", 2, 4, true), Err(ScaleError::EmptyRecipe));
}

#[test]
fn test_results_never_contain_non_finite_numbers() {
    let results = scale_recipe("1/0 cup sugar\n99999999999999999999 cups water", 1, 3, true).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].scaled_amount.is_finite());
}

#[test]
fn test_scaler_with_density_overrides() {
    let densities =
        DensityTable::default().merged_with(&DensityTable::new([("vanilla extract", 208.0)]));
    let scaler = RecipeScaler::with_tables(UnitCatalog::default(), densities, &ScalerConfig::default());
    let results = scaler.scale_recipe("2 teaspoons vanilla extract", 1, 1, true).unwrap();
    // 2/48 cup x 208 g/cup = 8.67 g
    assert_eq!(results[0].mass, MassEstimate::Grams(9));
}

#[test]
fn test_huge_volume_reports_out_of_range_mass() {
    let results = scale_recipe("100000000000000000 cups water", 1, 1, true).unwrap();
    assert_eq!(results[0].mass, MassEstimate::OutOfRange);

    let nines = "9".repeat(307);
    let results = scale_recipe(&format!("{nines} cups water"), 1, 2, true).unwrap();
    assert_eq!(results[0].mass, MassEstimate::OutOfRange);
}
