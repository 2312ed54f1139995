//! # Scaler Configuration Module
//!
//! This module defines configuration for a scaling run: display precision,
//! the default baking mode, the ingredient name length limit, and an optional
//! file of extra densities. Values can be read from the environment.

use crate::density::DensityTable;
use anyhow::{Context, Result};
use log::{debug, info};
use std::env;
use std::path::{Path, PathBuf};

// Constants for scaler configuration
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;
pub const MAX_DISPLAY_PRECISION: usize = 6;
pub const DEFAULT_MAX_INGREDIENT_LENGTH: usize = 100;

// Environment variable names
pub const ENV_BAKING_MODE: &str = "RECIPE_SCALER_BAKING_MODE";
pub const ENV_PRECISION: &str = "RECIPE_SCALER_PRECISION";
pub const ENV_MAX_INGREDIENT_LENGTH: &str = "RECIPE_SCALER_MAX_INGREDIENT_LENGTH";
pub const ENV_DENSITIES: &str = "RECIPE_SCALER_DENSITIES";
pub const ENV_LOG_FORMAT: &str = "RECIPE_SCALER_LOG_FORMAT";

/// Log output format for the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines via env_logger
    #[default]
    Plain,
    /// JSON lines via tracing-subscriber
    Json,
}

/// Configuration structure for recipe scaling
#[derive(Debug, Clone, PartialEq)]
pub struct ScalerConfig {
    /// Decimal places kept in scaled display strings
    pub display_precision: usize,
    /// Baking mode used when the caller does not specify one
    pub baking_mode: bool,
    /// Maximum length for ingredient names (truncated at a word boundary if longer)
    pub max_ingredient_length: usize,
    /// JSON file of extra densities (ingredient -> grams per cup)
    pub densities_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            display_precision: DEFAULT_DISPLAY_PRECISION,
            baking_mode: false,
            max_ingredient_length: DEFAULT_MAX_INGREDIENT_LENGTH,
            densities_path: None,
            log_format: LogFormat::Plain,
        }
    }
}

impl ScalerConfig {
    /// Build a configuration from `RECIPE_SCALER_*` environment variables
    ///
    /// Unset variables keep their defaults. Set but malformed values are
    /// reported as errors rather than silently ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BAKING_MODE) {
            config.baking_mode = parse_flag(&value)
                .with_context(|| format!("{ENV_BAKING_MODE} must be a boolean, got '{value}'"))?;
        }
        if let Some(value) = lookup(ENV_PRECISION) {
            let precision: usize = value
                .trim()
                .parse()
                .with_context(|| format!("{ENV_PRECISION} must be an integer, got '{value}'"))?;
            if precision > MAX_DISPLAY_PRECISION {
                anyhow::bail!("{ENV_PRECISION} must be at most {MAX_DISPLAY_PRECISION}, got {precision}");
            }
            config.display_precision = precision;
        }
        if let Some(value) = lookup(ENV_MAX_INGREDIENT_LENGTH) {
            let max_len: usize = value.trim().parse().with_context(|| {
                format!("{ENV_MAX_INGREDIENT_LENGTH} must be an integer, got '{value}'")
            })?;
            if max_len == 0 {
                anyhow::bail!("{ENV_MAX_INGREDIENT_LENGTH} must be positive");
            }
            config.max_ingredient_length = max_len;
        }
        if let Some(value) = lookup(ENV_DENSITIES) {
            if !value.trim().is_empty() {
                config.densities_path = Some(PathBuf::from(value.trim()));
            }
        }
        if let Some(value) = lookup(ENV_LOG_FORMAT) {
            config.log_format = match value.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "" | "plain" | "text" => LogFormat::Plain,
                other => anyhow::bail!("{ENV_LOG_FORMAT} must be 'plain' or 'json', got '{other}'"),
            };
        }

        debug!("Loaded scaler configuration: {:?}", config);
        Ok(config)
    }

    /// The density table for this configuration
    ///
    /// Starts from the default table and layers the densities file on top,
    /// when one is configured.
    pub fn density_table(&self) -> Result<DensityTable> {
        let defaults = DensityTable::default();
        match &self.densities_path {
            Some(path) => Ok(defaults.merged_with(&load_density_file(path)?)),
            None => Ok(defaults),
        }
    }
}

/// Read a JSON object mapping ingredient names to grams per cup
pub fn load_density_file(path: &Path) -> Result<DensityTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read densities file: {}", path.display()))?;
    let table: DensityTable = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse densities file: {}", path.display()))?;
    info!("Loaded {} densities from {}", table.len(), path.display());
    Ok(table)
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("invalid flag value '{other}'")),
    }
}
