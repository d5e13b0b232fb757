//! Gauge Core - Common-unit conversion
//!
//! This crate provides the core types used throughout Gauge:
//! - `ConversionTable`: unit name to multiplier-to-common-unit
//! - `Converter` / `convert`: multiply into the common unit, divide out of it
//! - `ConversionError`, `TableError`: structured, matchable failures
//!
//! The library installs no tracing subscriber; conversion steps are emitted
//! at `trace` level and failures at `debug`.

mod error;
mod table;
mod converter;

pub use error::{ConversionError, TableError, codes};
pub use table::{ConversionTable, TableBuilder, Direction};
pub use converter::{convert, Converter, ConversionRequest};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        convert, ConversionError, ConversionRequest, ConversionTable, Converter, Direction,
        TableError,
    };
}
