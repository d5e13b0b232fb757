//! Gauge Units - Built-in conversion tables
//!
//! Each category converts through one common unit:
//! - Length (m): km, cm, in, ft, mi, ...
//! - Mass (kg): g, t, lb, oz, ...
//! - Volume (L): mL, m3, gal, cup, tsp, ...
//! - Time (s): min, h, d, yr, ...
//! - Speed (m/s), Acceleration (m/s2), Force (N)
//! - Energy (J), Power (W), Pressure (Pa), Frequency (Hz)
//! - Data (bit): byte, kB, MiB, ...
//! - Angle (rad): deg, grad, arcmin, turn
//!
//! Temperature and area need offsets or other formulas and are not
//! provided here.

mod category;
mod error;
mod registry;
mod tables;

pub use category::{Category, CategoryTable};
pub use error::UnitsError;
pub use registry::{CategoryRegistry, TABLES, convert_in};
pub use tables::builtin_table;
