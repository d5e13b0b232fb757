//! Category registry - every known category's table, by name

use std::sync::LazyLock;
use serde::Deserialize;
use tracing::debug;
use gauge_core::{convert, ConversionError, TableError};
use crate::category::CategoryDef;
use crate::tables::builtin_table;
use crate::{Category, CategoryTable, UnitsError};

/// Global registry of the built-in categories
pub static TABLES: LazyLock<CategoryRegistry> = LazyLock::new(CategoryRegistry::builtin);

/// Convert within a built-in category using the global registry
pub fn convert_in(category: Category, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitsError> {
    TABLES.convert(category.name(), value, from_unit, to_unit)
}

/// Ordered set of category tables.
///
/// Order matters only for `category_of`, which returns the first category
/// that knows a unit.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<CategoryTable>,
}

/// JSON shape: `{ "categories": [ { "name", "common_unit", "units" } ] }`
#[derive(Debug, Deserialize)]
struct RegistryDef {
    categories: Vec<CategoryDef>,
}

impl CategoryRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in category
    pub fn builtin() -> Self {
        // Built-in tables are fixed data; failing here is a bug in tables.rs
        Self::try_builtin().expect("built-in unit tables are valid")
    }

    fn try_builtin() -> Result<Self, TableError> {
        let mut registry = Self::new();
        for category in Category::ALL {
            registry = registry.with_category(builtin_table(category)?)?;
        }
        debug!(categories = registry.len(), "loaded built-in unit tables");
        Ok(registry)
    }

    /// Load a registry from a JSON category set
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let def: RegistryDef = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for category in def.categories {
            registry = registry.with_category(CategoryTable::try_from(category)?)?;
        }
        debug!(categories = registry.len(), "loaded unit tables from JSON");
        Ok(registry)
    }

    /// Builder: add a category. Names are unique, compared case-insensitively.
    pub fn with_category(mut self, table: CategoryTable) -> Result<Self, TableError> {
        if self.get(table.name()).is_some() {
            return Err(TableError::DuplicateCategory(table.name().to_string()));
        }
        self.categories.push(table);
        Ok(self)
    }

    /// Get a category by name
    pub fn get(&self, name: &str) -> Option<&CategoryTable> {
        self.categories.iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Category names in registration order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name())
    }

    /// First category whose table knows `unit`
    pub fn category_of(&self, unit: &str) -> Option<&CategoryTable> {
        self.categories.iter().find(|c| c.table().contains(unit))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Convert within the named category
    pub fn convert(&self, category: &str, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, UnitsError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidInput(value).into());
        }
        let table = self.get(category)
            .ok_or_else(|| UnitsError::UnknownCategory(category.to_string()))?;
        Ok(convert(value, from_unit, to_unit, table.table())?)
    }
}
