//! # Recipe Scaler
//!
//! Scales free-text recipe ingredient lists by a serving-size ratio and, in
//! baking mode, estimates gram weights for cup and spoon measures from
//! ingredient densities.

pub mod density;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod mass_converter;
pub mod pipeline;
pub mod render;
pub mod scale_config;
pub mod scale_errors;
pub mod scaler;
pub mod units;
