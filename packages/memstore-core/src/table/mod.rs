//! Table contract and the four physical layouts implementing it.
//!
//! Every layout stores a fixed `num_rows x num_cols` grid of `i32` fields
//! and answers the same four query shapes:
//!
//! - `SELECT SUM(col0)`
//! - `SELECT SUM(col0) WHERE col1 > t1 AND col2 < t2`
//! - `SELECT SUM(col0) + ... + SUM(colN) WHERE col0 > t`
//! - `UPDATE col3 = col3 + col2 WHERE col0 < t`
//!
//! The provided methods on [`Table`] are the baseline full scans; layouts
//! override the ones their auxiliary structures can answer faster.

mod aggregated_table;
mod column_table;
mod format;
mod grid;
mod indexed_row_table;
mod layout;
mod row_table;

use std::fmt::Debug;

use crate::data::DataLoader;

pub use aggregated_table::AggregatedColumnTable;
pub use column_table::ColumnTable;
pub use format::render_table;
pub use indexed_row_table::{IndexedRowTable, DEFAULT_INDEXED_COLUMNS};
pub use layout::Layout;
pub use row_table::RowTable;

/// Column summed by the aggregate queries and range-filtered by the
/// single-threshold queries.
pub const PRIMARY_COLUMN: usize = 0;
/// Column compared with `>` in the two-predicate sum.
pub const FILTER_COLUMN: usize = 1;
/// Column compared with `<` in the two-predicate sum; also the update addend.
pub const RANGE_COLUMN: usize = 2;
/// Column rewritten by the predicated update.
pub const UPDATE_COLUMN: usize = 3;
/// Minimum table width for the query surface.
pub const QUERY_COLUMNS: usize = 4;

/// Shared contract of all table layouts.
///
/// Row and column arguments must satisfy `row < num_rows()` and
/// `col < num_cols()`; violating that is a programming error and panics.
pub trait Table: Debug {
    /// Physical layout of this table.
    fn layout(&self) -> Layout;

    /// Replaces the table contents with `rows`, each exactly `num_cols` wide.
    ///
    /// Every field is written through [`Table::put_int_field`], so indexes and
    /// aggregates end up consistent with the loaded values.
    ///
    /// # Panics
    /// Panics if `num_cols < QUERY_COLUMNS` or any row has the wrong width.
    fn load(&mut self, num_cols: usize, rows: &[Vec<i32>]);

    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    /// Returns the field at (`row`, `col`).
    fn get_int_field(&self, row: usize, col: usize) -> i32;

    /// Writes `value` at (`row`, `col`), maintaining any auxiliary structures.
    fn put_int_field(&mut self, row: usize, col: usize, value: i32);

    /// Renders the table's secondary indexes, if it has any.
    fn render_indexes(&self) -> Option<String> {
        None
    }

    /// Loads all rows provided by `loader`.
    fn load_from(&mut self, loader: &dyn DataLoader) {
        self.load(loader.num_cols(), loader.rows());
    }

    /// `SELECT SUM(col0) FROM table`
    fn column_sum(&self) -> i64 {
        (0..self.num_rows())
            .map(|r| self.get_int_field(r, PRIMARY_COLUMN) as i64)
            .sum()
    }

    /// `SELECT SUM(col0) FROM table WHERE col1 > threshold1 AND col2 < threshold2`
    fn predicated_column_sum(&self, threshold1: i32, threshold2: i32) -> i64 {
        let mut sum = 0i64;
        for r in 0..self.num_rows() {
            if self.get_int_field(r, FILTER_COLUMN) > threshold1
                && self.get_int_field(r, RANGE_COLUMN) < threshold2
            {
                sum += self.get_int_field(r, PRIMARY_COLUMN) as i64;
            }
        }
        sum
    }

    /// `SELECT SUM(col0) + SUM(col1) + ... + SUM(colN) FROM table WHERE col0 > threshold`
    fn predicated_all_columns_sum(&self, threshold: i32) -> i64 {
        let mut sum = 0i64;
        for r in 0..self.num_rows() {
            if self.get_int_field(r, PRIMARY_COLUMN) > threshold {
                sum += (0..self.num_cols())
                    .map(|c| self.get_int_field(r, c) as i64)
                    .sum::<i64>();
            }
        }
        sum
    }

    /// `UPDATE table SET col3 = col3 + col2 WHERE col0 < threshold`
    ///
    /// # Returns
    /// Number of rows updated.
    fn predicated_update(&mut self, threshold: i32) -> usize {
        let mut updated = 0;
        for r in 0..self.num_rows() {
            if self.get_int_field(r, PRIMARY_COLUMN) < threshold {
                apply_update(self, r);
                updated += 1;
            }
        }
        updated
    }
}

/// Rewrites `col3 = col2 + col3` for one row through the table's write path.
///
/// Addition wraps on `i32` overflow.
pub(crate) fn apply_update<T: Table + ?Sized>(table: &mut T, row: usize) {
    let addend = table.get_int_field(row, RANGE_COLUMN);
    let current = table.get_int_field(row, UPDATE_COLUMN);
    table.put_int_field(row, UPDATE_COLUMN, addend.wrapping_add(current));
}

/// Checks the load preconditions shared by every layout.
pub(crate) fn check_rows(num_cols: usize, rows: &[Vec<i32>]) {
    assert!(
        num_cols >= QUERY_COLUMNS,
        "table needs at least {} columns, got {}",
        QUERY_COLUMNS,
        num_cols
    );
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            num_cols,
            "row {} has {} fields, expected {}",
            r,
            row.len(),
            num_cols
        );
    }
}

/// Writes every loaded field through the table's normal write path.
pub(crate) fn populate<T: Table + ?Sized>(table: &mut T, rows: &[Vec<i32>]) {
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            table.put_int_field(r, c, *value);
        }
    }
    tracing::debug!(
        layout = %table.layout(),
        rows = table.num_rows(),
        cols = table.num_cols(),
        "Table loaded"
    );
}
