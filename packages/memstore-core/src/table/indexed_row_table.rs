//! Row-major table with ordered secondary indexes.
//!
//! Each indexed column keeps an [`OrderedIndex`] from value to the rows
//! holding it. Range predicates on an indexed column fetch their candidate
//! rows from the index instead of scanning the table. Predicates on columns
//! without an index fall back to a scan, so the indexed column set affects
//! only performance.

use crate::index::{OrderedIndex, RowSet};

use super::grid::{Grid, Order};
use super::{
    apply_update, check_rows, populate, Layout, Table, FILTER_COLUMN, PRIMARY_COLUMN,
    RANGE_COLUMN,
};

/// Columns carrying a range predicate in the fixed query shapes.
pub const DEFAULT_INDEXED_COLUMNS: [usize; 2] = [PRIMARY_COLUMN, RANGE_COLUMN];

/// Row-major layout with secondary indexes on selected columns.
#[derive(Debug, Clone)]
pub struct IndexedRowTable {
    grid: Grid,
    indexed_columns: Vec<usize>,
    /// One slot per column after load; `Some` for indexed columns.
    indexes: Vec<Option<OrderedIndex>>,
}

impl IndexedRowTable {
    /// Creates a table indexing [`DEFAULT_INDEXED_COLUMNS`].
    pub fn new() -> Self {
        Self::with_indexed_columns(&DEFAULT_INDEXED_COLUMNS)
    }

    /// Creates a table indexing the given columns.
    ///
    /// Duplicates are ignored. Columns beyond the loaded width are dropped at
    /// load time.
    pub fn with_indexed_columns(columns: &[usize]) -> Self {
        let mut indexed_columns = columns.to_vec();
        indexed_columns.sort_unstable();
        indexed_columns.dedup();
        Self {
            grid: Grid::empty(Order::RowMajor),
            indexed_columns,
            indexes: Vec::new(),
        }
    }

    /// Columns this table was asked to index.
    pub fn indexed_columns(&self) -> &[usize] {
        &self.indexed_columns
    }

    /// Read-only view of the index on `col`, if that column is indexed.
    pub fn index(&self, col: usize) -> Option<&OrderedIndex> {
        self.indexes.get(col).and_then(Option::as_ref)
    }

    /// Rebuilds every index from the stored fields.
    pub fn rebuild_indexes(&mut self) {
        for (col, slot) in self.indexes.iter_mut().enumerate() {
            if let Some(index) = slot {
                index.rebuild(self.grid.column_values(col));
            }
        }
    }

    /// Returns `true` if every row sits in exactly the bucket matching its
    /// current value in each indexed column.
    pub fn indexes_consistent(&self) -> bool {
        self.indexes.iter().enumerate().all(|(col, slot)| match slot {
            Some(index) => {
                index.len() == self.grid.num_rows()
                    && self
                        .grid
                        .column_values(col)
                        .enumerate()
                        .all(|(row, value)| index.contains(value, row))
            }
            None => true,
        })
    }

    /// Rows whose `col` value is strictly below `threshold`.
    fn rows_less_than(&self, col: usize, threshold: i32) -> RowSet {
        match self.index(col) {
            Some(index) => index.less_than(threshold),
            None => self.scan(col, |value| value < threshold),
        }
    }

    /// Rows whose `col` value is strictly above `threshold`.
    fn rows_greater_than(&self, col: usize, threshold: i32) -> RowSet {
        match self.index(col) {
            Some(index) => index.greater_than(threshold, true),
            None => self.scan(col, |value| value > threshold),
        }
    }

    fn scan(&self, col: usize, predicate: impl Fn(i32) -> bool) -> RowSet {
        tracing::debug!(col, "No index on predicate column, scanning");
        self.grid
            .column_values(col)
            .enumerate()
            .filter(|(_, value)| predicate(*value))
            .map(|(row, _)| row)
            .collect()
    }
}

impl Default for IndexedRowTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for IndexedRowTable {
    fn layout(&self) -> Layout {
        Layout::IndexedRow
    }

    fn load(&mut self, num_cols: usize, rows: &[Vec<i32>]) {
        check_rows(num_cols, rows);
        self.grid = Grid::zeroed(Order::RowMajor, rows.len(), num_cols);
        self.indexes = vec![None; num_cols];
        for &col in &self.indexed_columns {
            match self.indexes.get_mut(col) {
                Some(slot) => *slot = Some(OrderedIndex::new()),
                None => tracing::warn!(col, num_cols, "Indexed column beyond table width, ignoring"),
            }
        }
        for col in DEFAULT_INDEXED_COLUMNS {
            if self.index(col).is_none() {
                tracing::warn!(col, "Range predicate column is not indexed, queries will scan");
            }
        }
        populate(self, rows);
    }

    fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    fn num_cols(&self) -> usize {
        self.grid.num_cols()
    }

    fn get_int_field(&self, row: usize, col: usize) -> i32 {
        self.grid.get(row, col)
    }

    fn put_int_field(&mut self, row: usize, col: usize, value: i32) {
        let slot = self.grid.slot(row, col);
        if let Some(index) = self.indexes.get_mut(col).and_then(Option::as_mut) {
            // The index must see the value being replaced.
            let old = self.grid.get_slot(slot);
            index.update(row, old, value);
        }
        self.grid.put_slot(slot, value);
    }

    fn render_indexes(&self) -> Option<String> {
        let sections: Vec<String> = self
            .indexes
            .iter()
            .enumerate()
            .filter_map(|(col, slot)| {
                slot.as_ref()
                    .map(|index| format!("\nIndex on col{}\n\n{}", col, index))
            })
            .collect();
        if sections.is_empty() {
            None
        } else {
            Some(sections.concat())
        }
    }

    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64 {
        let candidates = self.rows_less_than(RANGE_COLUMN, threshold2);
        tracing::debug!(candidates = candidates.len(), "predicated_column_sum");

        let mut sum = 0i64;
        for &r in &candidates {
            if self.grid.get(r, FILTER_COLUMN) > threshold1 {
                sum += self.grid.get(r, PRIMARY_COLUMN) as i64;
            }
        }
        sum
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        let candidates = self.rows_greater_than(PRIMARY_COLUMN, threshold);
        tracing::debug!(candidates = candidates.len(), "predicated_all_columns_sum");

        candidates.iter().map(|&r| self.grid.row_total(r)).sum()
    }

    fn predicated_update(&mut self, threshold: i32) -> usize {
        // Snapshot first: the writes below may touch indexed columns.
        let candidates = self.rows_less_than(PRIMARY_COLUMN, threshold);
        tracing::debug!(candidates = candidates.len(), "predicated_update");

        for &r in &candidates {
            apply_update(self, r);
        }
        candidates.len()
    }
}
