//! Layout selection and construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AggregatedColumnTable, ColumnTable, IndexedRowTable, RowTable, Table};
use crate::error::DbError;

/// Physical layout of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Rows stored contiguously
    Row,
    /// Columns stored contiguously
    Column,
    /// Column-major with materialized row and column sums
    Aggregated,
    /// Row-major with ordered secondary indexes
    #[serde(rename = "indexed")]
    IndexedRow,
}

impl Layout {
    /// Every layout, in declaration order.
    pub const ALL: [Layout; 4] = [
        Layout::Row,
        Layout::Column,
        Layout::Aggregated,
        Layout::IndexedRow,
    ];

    /// Short name accepted by [`Layout::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Layout::Row => "row",
            Layout::Column => "column",
            Layout::Aggregated => "aggregated",
            Layout::IndexedRow => "indexed",
        }
    }

    /// Creates an empty table of this layout.
    ///
    /// # Arguments
    /// * `indexed_columns` - Columns to index; only used by [`Layout::IndexedRow`]
    pub fn create(self, indexed_columns: &[usize]) -> Box<dyn Table> {
        match self {
            Layout::Row => Box::new(RowTable::new()),
            Layout::Column => Box::new(ColumnTable::new()),
            Layout::Aggregated => Box::new(AggregatedColumnTable::new()),
            Layout::IndexedRow => Box::new(IndexedRowTable::with_indexed_columns(indexed_columns)),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row" => Ok(Layout::Row),
            "column" => Ok(Layout::Column),
            "aggregated" => Ok(Layout::Aggregated),
            "indexed" => Ok(Layout::IndexedRow),
            _ => Err(DbError::UnknownLayout(s.to_string())),
        }
    }
}
