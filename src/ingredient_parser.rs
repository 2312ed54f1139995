//! # Ingredient Parser
//!
//! This module turns one line of free recipe text into a structured
//! [`ParsedIngredientLine`]: a leading amount, an optional unit and the
//! ingredient name.
//!
//! ## Features
//!
//! - Mixed numbers (2 1/4), simple fractions (1/2), ranges (2-3), decimals and integers
//! - Ranges collapse to their midpoint; this is a known approximation
//! - Unit recognition through an injected [`UnitCatalog`]
//! - Counted items without a unit ("3 eggs", "2 ripe bananas")
//! - Lines without a leading quantity (headers, instructions) yield nothing
//!
//! ## Usage
//!
//! ```rust
//! use recipe_scaler::ingredient_parser::parse_ingredient_line;
//! use recipe_scaler::units::UnitCatalog;
//!
//! let catalog = UnitCatalog::default();
//! let parsed = parse_ingredient_line("2 1/4 cups sugar", &catalog).unwrap();
//! assert_eq!(parsed.amount, 2.25);
//! assert_eq!(parsed.unit, "cups");
//! assert_eq!(parsed.ingredient_name, "sugar");
//!
//! assert!(parse_ingredient_line("Preheat oven to 350F", &catalog).is_none());
//! ```

use crate::ingredient_model::{ParsedIngredientLine, QuantityKind};
use crate::scale_config::ScalerConfig;
use crate::units::UnitCatalog;
use lazy_static::lazy_static;
use log::{debug, trace, warn};
use regex::{Captures, Regex};

lazy_static! {
    /// Anchored quantity patterns, tried in order; first match wins
    static ref MIXED_NUMBER: Regex =
        Regex::new(r"^([0-9]+)\s+([0-9]+)/([0-9]+)").expect("mixed number pattern should be valid");
    static ref FRACTION: Regex =
        Regex::new(r"^([0-9]+)/([0-9]+)").expect("fraction pattern should be valid");
    static ref RANGE: Regex = Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*-\s*([0-9]+(?:\.[0-9]+)?)")
        .expect("range pattern should be valid");
    static ref DECIMAL: Regex =
        Regex::new(r"^[0-9]+\.[0-9]+").expect("decimal pattern should be valid");
    static ref INTEGER: Regex = Regex::new(r"^[0-9]+").expect("integer pattern should be valid");
}

/// A leading amount read off the front of a line
#[derive(Debug, Clone, Copy, PartialEq)]
struct LeadingAmount {
    amount: f64,
    kind: QuantityKind,
    /// Byte length of the matched amount text
    len: usize,
}

/// Parser holding its unit catalog and name-length limit
#[derive(Debug, Clone)]
pub struct IngredientParser {
    catalog: UnitCatalog,
    max_ingredient_length: usize,
}

impl IngredientParser {
    /// Create a parser over the default catalog and configuration
    pub fn new() -> Self {
        Self::with_config(UnitCatalog::default(), &ScalerConfig::default())
    }

    /// Create a parser with an injected catalog and configuration
    pub fn with_config(catalog: UnitCatalog, config: &ScalerConfig) -> Self {
        debug!(
            "Creating IngredientParser with {} unit tokens, max_ingredient_length={}",
            catalog.tokens().len(),
            config.max_ingredient_length
        );
        Self {
            catalog,
            max_ingredient_length: config.max_ingredient_length,
        }
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    /// Parse one line, applying the configured ingredient name length limit
    pub fn parse(&self, line: &str) -> Option<ParsedIngredientLine> {
        let mut parsed = parse_ingredient_line(line, &self.catalog)?;
        parsed.ingredient_name =
            truncate_ingredient_name(&parsed.ingredient_name, self.max_ingredient_length);
        Some(parsed)
    }
}

impl Default for IngredientParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a single ingredient line
///
/// Returns `None` when the line does not start with a quantity, or when the
/// quantity cannot produce a finite, non-negative amount (e.g. "1/0").
pub fn parse_ingredient_line(line: &str, catalog: &UnitCatalog) -> Option<ParsedIngredientLine> {
    let line = line.trim();
    let Some(leading) = parse_leading_amount(line) else {
        trace!("No leading quantity in line: '{}'", line);
        return None;
    };

    let rest = line[leading.len..].trim();
    let (unit, ingredient) = match catalog.match_prefix(rest) {
        Some((unit, ingredient)) => (unit, ingredient),
        None => ("", rest),
    };
    let ingredient_name = clean_ingredient_name(ingredient);

    trace!(
        "Parsed line '{}' -> amount={}, unit='{}', ingredient='{}'",
        line,
        leading.amount,
        unit,
        ingredient_name
    );

    Some(ParsedIngredientLine {
        amount: leading.amount,
        unit: unit.to_string(),
        ingredient_name,
        quantity: leading.kind,
    })
}

/// Read the amount at the start of `line`
fn parse_leading_amount(line: &str) -> Option<LeadingAmount> {
    let leading = if let Some(caps) = MIXED_NUMBER.captures(line) {
        let whole = number(&caps, 1)?;
        let fraction = ratio(number(&caps, 2)?, number(&caps, 3)?)?;
        leading_amount(&caps, whole + fraction, QuantityKind::MixedNumber)
    } else if let Some(caps) = FRACTION.captures(line) {
        let value = ratio(number(&caps, 1)?, number(&caps, 2)?)?;
        leading_amount(&caps, value, QuantityKind::Fraction)
    } else if let Some(caps) = RANGE.captures(line) {
        let low = number(&caps, 1)?;
        let high = number(&caps, 2)?;
        leading_amount(&caps, (low + high) / 2.0, QuantityKind::Range { low, high })
    } else if let Some(m) = DECIMAL.find(line) {
        LeadingAmount {
            amount: m.as_str().parse().ok()?,
            kind: QuantityKind::Decimal,
            len: m.end(),
        }
    } else {
        let m = INTEGER.find(line)?;
        LeadingAmount {
            amount: m.as_str().parse().ok()?,
            kind: QuantityKind::Integer,
            len: m.end(),
        }
    };

    if !leading.amount.is_finite() || leading.amount < 0.0 {
        debug!("Rejecting non-finite amount in line: '{}'", line);
        return None;
    }
    Some(leading)
}

fn leading_amount(caps: &Captures<'_>, amount: f64, kind: QuantityKind) -> LeadingAmount {
    LeadingAmount {
        amount,
        kind,
        len: caps.get(0).map_or(0, |m| m.end()),
    }
}

fn number(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse().ok()
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        debug!("Rejecting fraction with zero denominator");
        return None;
    }
    Some(numerator / denominator)
}

/// Strip surrounding hyphens and whitespace, collapse inner spaces, lowercase
fn clean_ingredient_name(raw: &str) -> String {
    raw.trim_matches(|c: char| c == '-' || c.is_whitespace())
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}

/// Cut an ingredient name to at most `max_len` bytes, at a word boundary when possible
fn truncate_ingredient_name(name: &str, max_len: usize) -> String {
    if name.len() <= max_len {
        return name.to_string();
    }

    let mut cut = max_len;
    while !name.is_char_boundary(cut) {
        cut -= 1;
    }
    let truncated = &name[..cut];
    let result = match truncated.rfind(' ') {
        Some(last_space) => truncated[..last_space].trim_end(),
        None => truncated,
    };
    warn!(
        "Ingredient name truncated due to length limit ({} > {}): '{}' -> '{}'",
        name.len(),
        max_len,
        name,
        result
    );
    result.to_string()
}
