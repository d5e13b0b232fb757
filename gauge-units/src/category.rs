//! Measurement categories and their common units

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use gauge_core::{ConversionTable, TableError};
use crate::UnitsError;

/// Built-in measurement categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Volume,
    Time,
    Speed,
    Acceleration,
    Force,
    Energy,
    Power,
    Pressure,
    Frequency,
    Data,
    Angle,
}

impl Category {
    /// Every built-in category, in lookup order
    pub const ALL: [Category; 13] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Time,
        Category::Speed,
        Category::Acceleration,
        Category::Force,
        Category::Energy,
        Category::Power,
        Category::Pressure,
        Category::Frequency,
        Category::Data,
        Category::Angle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Volume => "volume",
            Category::Time => "time",
            Category::Speed => "speed",
            Category::Acceleration => "acceleration",
            Category::Force => "force",
            Category::Energy => "energy",
            Category::Power => "power",
            Category::Pressure => "pressure",
            Category::Frequency => "frequency",
            Category::Data => "data",
            Category::Angle => "angle",
        }
    }

    /// The unit every other unit in this category converts through
    pub fn common_unit(self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Mass => "kg",
            Category::Volume => "L",
            Category::Time => "s",
            Category::Speed => "m/s",
            Category::Acceleration => "m/s2",
            Category::Force => "N",
            Category::Energy => "J",
            Category::Power => "W",
            Category::Pressure => "Pa",
            Category::Frequency => "Hz",
            Category::Data => "bit",
            Category::Angle => "rad",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnitsError::UnknownCategory(s.to_string()))
    }
}

/// A named category: its common unit and its conversion table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTable {
    name: String,
    common_unit: String,
    units: ConversionTable,
}

impl CategoryTable {
    /// The common unit must be in `units` with multiplier exactly 1
    pub fn new(
        name: impl Into<String>,
        common_unit: impl Into<String>,
        units: ConversionTable,
    ) -> Result<Self, TableError> {
        let common_unit = common_unit.into();
        match units.multiplier(&common_unit) {
            None => return Err(TableError::MissingCommonUnit(common_unit)),
            Some(m) if m != 1.0 => {
                return Err(TableError::CommonUnitNotUnity { unit: common_unit, multiplier: m });
            }
            Some(_) => {}
        }

        Ok(CategoryTable {
            name: name.into(),
            common_unit,
            units,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn common_unit(&self) -> &str {
        &self.common_unit
    }

    pub fn table(&self) -> &ConversionTable {
        &self.units
    }
}

/// Unvalidated shape of a category in a JSON definition
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryDef {
    pub name: String,
    pub common_unit: String,
    pub units: HashMap<String, f64>,
}

impl TryFrom<CategoryDef> for CategoryTable {
    type Error = TableError;

    fn try_from(def: CategoryDef) -> Result<Self, Self::Error> {
        CategoryTable::new(def.name, def.common_unit, ConversionTable::try_from(def.units)?)
    }
}
