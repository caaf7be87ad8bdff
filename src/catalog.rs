//! Table catalog
//!
//! The set of tables (and their ordered column lists) the editor knows about.
//! The host owns the catalog and may replace it between calls; every analysis
//! call borrows it as an immutable snapshot.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A known relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    pub name: String,
    /// Column names in declaration order
    #[serde(default)]
    pub columns: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Case-insensitive column lookup. Returns the column as declared.
    pub fn column(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}

/// Ordered collection of known tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    pub fn from_tables(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Case-insensitive table lookup
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Every table and column name, tables first, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables
            .iter()
            .map(|t| t.name.as_str())
            .chain(self.tables.iter().flat_map(|t| t.columns.iter().map(String::as_str)))
    }

    /// Parse a catalog from TOML (`[[tables]]` entries).
    pub fn from_toml_str(content: &str) -> CatalogResult<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validated()
    }

    /// Parse a catalog from JSON (`{"tables": [...]}`).
    pub fn from_json_str(content: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validated()
    }

    /// Load a catalog file, picking the format from its extension.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let catalog = match ext.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };
        tracing::debug!(
            path = %path.display(),
            tables = catalog.tables.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    fn validated(self) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for table in &self.tables {
            if table.name.trim().is_empty() {
                return Err(CatalogError::EmptyTableName);
            }
            if !seen.insert(table.name.to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateTable(table.name.clone()));
            }
        }
        Ok(self)
    }
}
