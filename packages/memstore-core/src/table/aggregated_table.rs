//! Column-major table with materialized row and column sums.
//!
//! `row_sums[r]` and `col_sums[c]` are adjusted by the signed delta of every
//! write before the buffer itself changes. There is no other write path, so
//! the sums always match the stored fields.

use super::grid::{Grid, Order};
use super::{check_rows, populate, Layout, Table, PRIMARY_COLUMN};

/// Column-major layout tuned for the whole-column and whole-row sums.
#[derive(Debug, Clone)]
pub struct AggregatedColumnTable {
    grid: Grid,
    row_sums: Vec<i64>,
    col_sums: Vec<i64>,
}

impl AggregatedColumnTable {
    pub fn new() -> Self {
        Self {
            grid: Grid::empty(Order::ColumnMajor),
            row_sums: Vec::new(),
            col_sums: Vec::new(),
        }
    }

    /// Materialized sum of every field in `row`.
    pub fn row_sum(&self, row: usize) -> i64 {
        self.row_sums[row]
    }

    /// Materialized sum of every field in `col`.
    pub fn column_total(&self, col: usize) -> i64 {
        self.col_sums[col]
    }

    /// Recomputes both aggregate arrays from the stored fields.
    pub fn rebuild_aggregates(&mut self) {
        self.row_sums = (0..self.grid.num_rows())
            .map(|r| self.grid.row_total(r))
            .collect();
        self.col_sums = (0..self.grid.num_cols())
            .map(|c| self.grid.column_total(c))
            .collect();
        tracing::trace!(
            rows = self.row_sums.len(),
            cols = self.col_sums.len(),
            "Rebuilt materialized aggregates"
        );
    }

    /// Returns `true` if the incrementally maintained sums equal a
    /// brute-force recomputation.
    pub fn aggregates_consistent(&self) -> bool {
        let rows_ok = (0..self.grid.num_rows()).all(|r| self.row_sums[r] == self.grid.row_total(r));
        let cols_ok =
            (0..self.grid.num_cols()).all(|c| self.col_sums[c] == self.grid.column_total(c));
        rows_ok && cols_ok
    }
}

impl Default for AggregatedColumnTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for AggregatedColumnTable {
    fn layout(&self) -> Layout {
        Layout::Aggregated
    }

    fn load(&mut self, num_cols: usize, rows: &[Vec<i32>]) {
        check_rows(num_cols, rows);
        self.grid = Grid::zeroed(Order::ColumnMajor, rows.len(), num_cols);
        // Zeroed grid, zeroed sums: the delta path keeps them in step from here.
        self.row_sums = vec![0; rows.len()];
        self.col_sums = vec![0; num_cols];
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
        let delta = value as i64 - self.grid.get_slot(slot) as i64;
        self.row_sums[row] += delta;
        self.col_sums[col] += delta;
        self.grid.put_slot(slot, value);
    }

    fn column_sum(&self) -> i64 {
        self.col_sums.get(PRIMARY_COLUMN).copied().unwrap_or(0)
    }

    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        let mut sum = 0i64;
        for r in 0..self.grid.num_rows() {
            if self.grid.get(r, PRIMARY_COLUMN) > threshold {
                sum += self.row_sums[r];
            }
        }
        sum
    }
}
