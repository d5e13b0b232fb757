//! Errors for category-level lookups

use thiserror::Error;
use gauge_core::{ConversionError, TableError};

#[derive(Debug, Error)]
pub enum UnitsError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl UnitsError {
    /// The underlying conversion failure, if any
    pub fn as_conversion(&self) -> Option<&ConversionError> {
        match self {
            UnitsError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}
