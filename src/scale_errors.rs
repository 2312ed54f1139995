//! # Scale Error Types Module
//!
//! Errors raised for systemic misuse of the scaling pipeline. Problems with
//! individual lines are never errors: those lines are skipped or marked.

/// Custom error types for scaling operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Recipe text is empty or only whitespace
    EmptyRecipe,
    /// A serving count is zero
    InvalidServings { original: u32, desired: u32 },
    /// Configuration could not be loaded
    Config(String),
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::EmptyRecipe => write!(f, "Recipe text is empty"),
            ScaleError::InvalidServings { original, desired } => write!(
                f,
                "Servings must be positive numbers (original: {original}, desired: {desired})"
            ),
            ScaleError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ScaleError {}

impl From<anyhow::Error> for ScaleError {
    fn from(err: anyhow::Error) -> Self {
        ScaleError::Config(format!("{err:#}"))
    }
}
