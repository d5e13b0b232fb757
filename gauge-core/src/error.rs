//! Conversion and table errors
//!
//! Both enums are plain values: callers match on the variant to tell a bad
//! input apart from a unit the table does not know.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const UNSUPPORTED_UNIT: &str = "UNSUPPORTED_UNIT";
    pub const INVALID_TABLE: &str = "INVALID_TABLE";
}

/// Failure of a single conversion call
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    /// The value is not a real number (NaN or infinite)
    #[error("invalid input: {0} is not a finite number")]
    InvalidInput(f64),

    /// The unit is absent from the category's table
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),
}

impl ConversionError {
    /// Lookup failure for `unit`
    pub fn unsupported(unit: impl Into<String>) -> Self {
        ConversionError::UnsupportedUnit(unit.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::InvalidInput(_) => codes::INVALID_INPUT,
            ConversionError::UnsupportedUnit(_) => codes::UNSUPPORTED_UNIT,
        }
    }

    /// The offending unit name, if this is a lookup failure
    pub fn unit(&self) -> Option<&str> {
        match self {
            ConversionError::UnsupportedUnit(unit) => Some(unit),
            ConversionError::InvalidInput(_) => None,
        }
    }
}

/// Errors raised while building or loading a conversion table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("unit name must not be empty")]
    EmptyUnitName,

    #[error("invalid multiplier for {unit}: {multiplier} (must be finite and positive)")]
    InvalidMultiplier { unit: String, multiplier: f64 },

    #[error("common unit {0} is not in the table")]
    MissingCommonUnit(String),

    #[error("common unit {unit} must have multiplier 1, found {multiplier}")]
    CommonUnitNotUnity { unit: String, multiplier: f64 },

    #[error("unit {0} is defined more than once")]
    DuplicateUnit(String),

    #[error("alias {alias} refers to unknown unit {target}")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("category {0} is defined more than once")]
    DuplicateCategory(String),

    #[error("malformed table definition: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableError {
    /// Machine-readable code; every table error shares one
    pub fn code(&self) -> &'static str {
        codes::INVALID_TABLE
    }
}
