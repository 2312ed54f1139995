//! # Recipe Scaling Example
//!
//! Scales a pasted cookie recipe with the default tables, then again in
//! baking mode with an extra density supplied by the caller, and finally with
//! a custom display precision.

use recipe_scaler::density::DensityTable;
use recipe_scaler::pipeline::{scale_recipe, RecipeScaler};
use recipe_scaler::render::render_table;
use recipe_scaler::scale_config::ScalerConfig;
use recipe_scaler::units::UnitCatalog;

const COOKIES: &str = r#"
    Classic Chocolate Chip Cookies (makes 24)

    Ingredients:
    2 1/4 cups all-purpose flour
    1 teaspoon baking soda
    1 teaspoon salt
    1 cup butter, softened
    3/4 cup granulated sugar
    3/4 cup brown sugar
    2 large eggs
    2 teaspoons vanilla extract
    2-3 cups chocolate chips

    Instructions:
    Preheat oven to 375F...
    "#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Recipe Scaling Example");
    println!("======================\n");

    // Example 1: Scale 24 cookies down to 12
    println!("Example 1: Half batch");
    println!("---------------------");
    let results = scale_recipe(COOKIES, 24, 12, false)?;
    print!("{}", render_table(&results));
    println!();

    // Example 2: Baking mode with the default densities
    println!("Example 2: Double batch in baking mode");
    println!("--------------------------------------");
    let results = scale_recipe(COOKIES, 24, 48, true)?;
    print!("{}", render_table(&results));
    let unknown: Vec<&str> = results
        .iter()
        .filter(|r| r.mass.is_unknown_density())
        .map(|r| r.ingredient.as_str())
        .collect();
    println!("No density for: {}\n", unknown.join(", "));

    // Example 3: Supply the missing densities
    println!("Example 3: Extra densities");
    println!("--------------------------");
    let extra = DensityTable::new([("vanilla extract", 208.0), ("chocolate chips", 170.0)]);
    let scaler = RecipeScaler::with_tables(
        UnitCatalog::default(),
        DensityTable::default().merged_with(&extra),
        &ScalerConfig::default(),
    );
    let results = scaler.scale_recipe(COOKIES, 24, 48, true)?;
    print!("{}", render_table(&results));
    println!();

    // Example 4: One-decimal display
    println!("Example 4: One decimal place");
    println!("----------------------------");
    let config = ScalerConfig {
        display_precision: 1,
        ..Default::default()
    };
    let scaler =
        RecipeScaler::with_tables(UnitCatalog::default(), DensityTable::default(), &config);
    let results = scaler.scale_recipe(COOKIES, 24, 10, false)?;
    for result in &results {
        println!("  {result}");
    }

    Ok(())
}
