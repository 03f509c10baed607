//! Column-major table.
//!
//! Data is laid out as `col 0 | col 1 | ... | col m`.

use super::grid::{Grid, Order};
use super::{check_rows, populate, Layout, Table, PRIMARY_COLUMN};

/// Baseline column-major layout.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    grid: Grid,
}

impl ColumnTable {
    pub fn new() -> Self {
        Self {
            grid: Grid::empty(Order::ColumnMajor),
        }
    }
}

impl Default for ColumnTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for ColumnTable {
    fn layout(&self) -> Layout {
        Layout::Column
    }

    fn load(&mut self, num_cols: usize, rows: &[Vec<i32>]) {
        check_rows(num_cols, rows);
        self.grid = Grid::zeroed(Order::ColumnMajor, rows.len(), num_cols);
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
        self.grid.put_slot(slot, value);
    }

    fn column_sum(&self) -> i64 {
        // Column 0 occupies the first `num_rows` slots.
        self.grid.column_total(PRIMARY_COLUMN)
    }
}
