use anyhow::{bail, Context, Result};
use recipe_scaler::pipeline::RecipeScaler;
use recipe_scaler::render::{render_json, render_table};
use recipe_scaler::scale_config::{LogFormat, ScalerConfig};
use std::env;
use std::fs;
use std::io::{self, Read};

const USAGE: &str = "Usage: recipe-scaler <recipe-file|-> <original-servings> <desired-servings> [--baking] [--json]";

/// Parsed command-line arguments
#[derive(Debug)]
struct CliArgs {
    recipe_path: String,
    original_servings: u32,
    desired_servings: u32,
    baking_mode: Option<bool>,
    json: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = ScalerConfig::from_env()?;
    init_logging(config.log_format);

    tracing::info!("Starting recipe scaler");

    let args = parse_args(env::args().skip(1))?;
    let recipe = read_recipe(&args.recipe_path)?;
    if recipe.trim().is_empty() {
        bail!("Paste a recipe first: {} is empty", args.recipe_path);
    }

    let scaler = RecipeScaler::from_config(&config)?;
    let baking_mode = args.baking_mode.unwrap_or(config.baking_mode);
    let results = scaler.scale_recipe(
        &recipe,
        args.original_servings,
        args.desired_servings,
        baking_mode,
    )?;

    tracing::info!(
        results = results.len(),
        baking_mode,
        original = args.original_servings,
        desired = args.desired_servings,
        "Scaled recipe"
    );

    if args.json {
        println!("{}", render_json(&results)?);
    } else {
        print!("{}", render_table(&results));
    }
    Ok(())
}

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Plain => env_logger::init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init(),
    }
}

fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut baking_mode = None;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--baking" => baking_mode = Some(true),
            "--no-baking" => baking_mode = Some(false),
            "--json" => json = true,
            "-h" | "--help" => bail!("{USAGE}"),
            flag if flag.starts_with("--") => bail!("Unknown option '{flag}'\n{USAGE}"),
            _ => positional.push(arg),
        }
    }

    let [recipe_path, original, desired] = <[String; 3]>::try_from(positional)
        .map_err(|_| anyhow::anyhow!("Expected 3 arguments\n{USAGE}"))?;

    Ok(CliArgs {
        recipe_path,
        original_servings: parse_servings("original", &original)?,
        desired_servings: parse_servings("desired", &desired)?,
        baking_mode,
        json,
    })
}

fn parse_servings(label: &str, value: &str) -> Result<u32> {
    let servings: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("{label} servings must be a whole number, got '{value}'"))?;
    if servings <= 0 {
        bail!("Servings must be positive numbers ({label}: {servings})");
    }
    u32::try_from(servings).with_context(|| format!("{label} servings is too large: {servings}"))
}

fn read_recipe(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read recipe from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read recipe file: {path}"))
}
