//! Conversion table: unit name to multiplier-to-common-unit

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::{ConversionError, TableError};

/// Which way a single conversion step goes relative to the common unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Into the common unit: value * multiplier
    ToCommon,
    /// Out of the common unit: value / multiplier
    FromCommon,
}

impl Direction {
    /// Apply a unit's multiplier in this direction
    pub fn apply(self, value: f64, multiplier: f64) -> f64 {
        match self {
            Direction::ToCommon => value * multiplier,
            Direction::FromCommon => value / multiplier,
        }
    }
}

/// Immutable mapping from unit identifier to the factor that turns one of
/// that unit into the category's common unit.
///
/// Every key is non-empty and every multiplier is finite and positive.
/// Deserialization goes through the same checks as the builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, f64>", into = "HashMap<String, f64>")]
pub struct ConversionTable {
    multipliers: HashMap<String, f64>,
}

impl ConversionTable {
    /// Start building a table
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Build a table from `(unit, multiplier)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        pairs.into_iter()
            .fold(TableBuilder::default(), |b, (unit, m)| b.unit(unit, m))
            .build()
    }

    /// Parse a JSON object of `{ "unit": multiplier }`.
    /// Syntax errors come back as `Json`, bad entries as their own variant.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let multipliers: HashMap<String, f64> = serde_json::from_str(json)?;
        Self::try_from(multipliers)
    }

    /// Multiplier for a unit, if the table knows it
    pub fn multiplier(&self, unit: &str) -> Option<f64> {
        self.multipliers.get(unit).copied()
    }

    /// Whether the table knows `unit` (symbol or alias)
    pub fn contains(&self, unit: &str) -> bool {
        self.multipliers.contains_key(unit)
    }

    /// All unit names, sorted
    pub fn units(&self) -> Vec<&str> {
        let mut units: Vec<&str> = self.multipliers.keys().map(|s| s.as_str()).collect();
        units.sort_unstable();
        units
    }

    /// Number of entries, aliases included
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// True for a table with no units
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// One lookup plus one multiply or divide
    pub fn step(&self, value: f64, unit: &str, direction: Direction) -> Result<f64, ConversionError> {
        match self.multiplier(unit) {
            Some(multiplier) => Ok(direction.apply(value, multiplier)),
            None => {
                debug!(unit, ?direction, "unit not found in conversion table");
                Err(ConversionError::unsupported(unit))
            }
        }
    }

    /// Express `value` of `unit` in the common unit
    pub fn to_common(&self, value: f64, unit: &str) -> Result<f64, ConversionError> {
        self.step(value, unit, Direction::ToCommon)
    }

    /// Express a common-unit `value` in `unit`
    pub fn from_common(&self, value: f64, unit: &str) -> Result<f64, ConversionError> {
        self.step(value, unit, Direction::FromCommon)
    }

    fn validate(unit: &str, multiplier: f64) -> Result<(), TableError> {
        if unit.is_empty() {
            return Err(TableError::EmptyUnitName);
        }
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(TableError::InvalidMultiplier {
                unit: unit.to_string(),
                multiplier,
            });
        }
        Ok(())
    }
}

impl TryFrom<HashMap<String, f64>> for ConversionTable {
    type Error = TableError;

    fn try_from(multipliers: HashMap<String, f64>) -> Result<Self, Self::Error> {
        for (unit, &multiplier) in &multipliers {
            Self::validate(unit, multiplier)?;
        }
        Ok(ConversionTable { multipliers })
    }
}

impl From<ConversionTable> for HashMap<String, f64> {
    fn from(table: ConversionTable) -> Self {
        table.multipliers
    }
}

/// Incremental table construction with aliases.
///
/// Aliases are resolved at `build` time and stored as ordinary keys that
/// carry their target's multiplier. A name may appear only once, whether
/// as a unit or as an alias.
#[derive(Debug, Default)]
pub struct TableBuilder {
    units: Vec<(String, f64)>,
    aliases: Vec<(String, String)>,
}

impl TableBuilder {
    /// Add a unit with its multiplier to the common unit
    pub fn unit(mut self, unit: impl Into<String>, multiplier: f64) -> Self {
        self.units.push((unit.into(), multiplier));
        self
    }

    /// Add another name for an already-declared unit
    pub fn alias(mut self, alias: impl Into<String>, unit: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), unit.into()));
        self
    }

    /// Validate every entry and resolve aliases
    pub fn build(self) -> Result<ConversionTable, TableError> {
        let mut multipliers = HashMap::with_capacity(self.units.len() + self.aliases.len());

        for (unit, multiplier) in self.units {
            ConversionTable::validate(&unit, multiplier)?;
            if multipliers.contains_key(&unit) {
                return Err(TableError::DuplicateUnit(unit));
            }
            multipliers.insert(unit, multiplier);
        }

        for (alias, target) in self.aliases {
            if alias.is_empty() {
                return Err(TableError::EmptyUnitName);
            }
            if multipliers.contains_key(&alias) {
                return Err(TableError::DuplicateUnit(alias));
            }
            let multiplier = match multipliers.get(&target) {
                Some(&m) => m,
                None => return Err(TableError::UnknownAliasTarget { alias, target }),
            };
            multipliers.insert(alias, multiplier);
        }

        Ok(ConversionTable { multipliers })
    }
}
