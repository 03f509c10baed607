//! Row-major table.
//!
//! Data is laid out as `row 0 | row 1 | ... | row n`.

use super::grid::{Grid, Order};
use super::{check_rows, populate, Layout, Table};

/// Baseline row-major layout answering every query with a full scan.
#[derive(Debug, Clone)]
pub struct RowTable {
    grid: Grid,
}

impl RowTable {
    pub fn new() -> Self {
        Self {
            grid: Grid::empty(Order::RowMajor),
        }
    }
}

impl Default for RowTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Table for RowTable {
    fn layout(&self) -> Layout {
        Layout::Row
    }

    fn load(&mut self, num_cols: usize, rows: &[Vec<i32>]) {
        check_rows(num_cols, rows);
        self.grid = Grid::zeroed(Order::RowMajor, rows.len(), num_cols);
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
}
