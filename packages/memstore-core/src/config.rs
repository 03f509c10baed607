//! Store configuration and table construction.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DataLoader;
use crate::error::DbError;
use crate::table::{Layout, Table, DEFAULT_INDEXED_COLUMNS, QUERY_COLUMNS};

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Physical layout of the table
    pub layout: Layout,
    /// Columns to index (indexed layout only)
    pub indexed_columns: Vec<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            layout: Layout::IndexedRow,
            indexed_columns: DEFAULT_INDEXED_COLUMNS.to_vec(),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration for `layout` with default indexed columns.
    pub fn for_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Missing keys take their default values.
    pub fn from_json_str(input: &str) -> Result<Self, DbError> {
        let config: StoreConfig =
            serde_json::from_str(input).map_err(|e| DbError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration from `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .map_err(|e| DbError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&input)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, DbError> {
        serde_json::to_string_pretty(self).map_err(|e| DbError::SerializationError(e.to_string()))
    }

    /// Rejects duplicate indexed columns.
    pub fn validate(&self) -> Result<(), DbError> {
        let mut seen = HashSet::new();
        for col in &self.indexed_columns {
            if !seen.insert(col) {
                return Err(DbError::InvalidConfig(format!(
                    "indexed column {} listed more than once",
                    col
                )));
            }
        }
        Ok(())
    }

    /// Creates a table of the configured layout and loads `loader` into it.
    ///
    /// # Returns
    /// `Err(DbError::TooFewColumns)` if the data is narrower than the query
    /// surface, or `Err(DbError::RaggedRow)` if a row has the wrong width.
    pub fn build(&self, loader: &dyn DataLoader) -> Result<Box<dyn Table>, DbError> {
        self.validate()?;

        let num_cols = loader.num_cols();
        if num_cols < QUERY_COLUMNS {
            return Err(DbError::TooFewColumns {
                got: num_cols,
                required: QUERY_COLUMNS,
            });
        }
        if let Some((r, row)) = loader
            .rows()
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != num_cols)
        {
            return Err(DbError::RaggedRow {
                line: r + 1,
                expected: num_cols,
                got: row.len(),
            });
        }

        let mut table = self.layout.create(&self.indexed_columns);
        table.load_from(loader);
        Ok(table)
    }
}
