//! Flat field grid with row-major or column-major slot addressing.

use crate::codec::FieldBuffer;

/// Slot addressing order of a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order {
    /// Slot `r * num_cols + c`
    RowMajor,
    /// Slot `c * num_rows + r`
    ColumnMajor,
}

/// Fixed-size grid of fields backed by one [`FieldBuffer`].
#[derive(Debug, Clone)]
pub(crate) struct Grid {
    order: Order,
    num_rows: usize,
    num_cols: usize,
    buffer: FieldBuffer,
}

impl Grid {
    /// Creates an empty grid with no rows or columns.
    pub(crate) fn empty(order: Order) -> Self {
        Self {
            order,
            num_rows: 0,
            num_cols: 0,
            buffer: FieldBuffer::default(),
        }
    }

    /// Allocates a zero-filled `num_rows x num_cols` grid.
    ///
    /// # Panics
    /// Panics if the slot count overflows `usize`.
    pub(crate) fn zeroed(order: Order, num_rows: usize, num_cols: usize) -> Self {
        let slots = num_rows
            .checked_mul(num_cols)
            .expect("grid slot count overflow");
        Self {
            order,
            num_rows,
            num_cols,
            buffer: FieldBuffer::zeroed(slots),
        }
    }

    pub(crate) fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub(crate) fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the slot index of (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub(crate) fn slot(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "field ({}, {}) out of range for {}x{} table",
            row,
            col,
            self.num_rows,
            self.num_cols
        );
        match self.order {
            Order::RowMajor => row * self.num_cols + col,
            Order::ColumnMajor => col * self.num_rows + row,
        }
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> i32 {
        self.buffer.get(self.slot(row, col))
    }

    #[inline]
    pub(crate) fn get_slot(&self, slot: usize) -> i32 {
        self.buffer.get(slot)
    }

    #[inline]
    pub(crate) fn put_slot(&mut self, slot: usize, value: i32) {
        self.buffer.put(slot, value)
    }

    /// Sum of every field in `row`.
    pub(crate) fn row_total(&self, row: usize) -> i64 {
        (0..self.num_cols).map(|c| self.get(row, c) as i64).sum()
    }

    /// Sum of every field in `col`.
    pub(crate) fn column_total(&self, col: usize) -> i64 {
        (0..self.num_rows).map(|r| self.get(r, col) as i64).sum()
    }

    /// Values of `col` in row order.
    pub(crate) fn column_values(&self, col: usize) -> impl Iterator<Item = i32> + '_ {
        (0..self.num_rows).map(move |r| self.get(r, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::timeout;

    #[timeout(1000)]
    #[test]
    fn test_row_major_slots() {
        let grid = Grid::zeroed(Order::RowMajor, 3, 4);
        assert_eq!(grid.slot(0, 0), 0);
        assert_eq!(grid.slot(0, 3), 3);
        assert_eq!(grid.slot(1, 0), 4);
        assert_eq!(grid.slot(2, 3), 11);
    }

    #[timeout(1000)]
    #[test]
    fn test_column_major_slots() {
        let grid = Grid::zeroed(Order::ColumnMajor, 3, 4);
        assert_eq!(grid.slot(0, 0), 0);
        assert_eq!(grid.slot(2, 0), 2);
        assert_eq!(grid.slot(0, 1), 3);
        assert_eq!(grid.slot(2, 3), 11);
    }

    #[timeout(1000)]
    #[test]
    fn test_totals() {
        let mut grid = Grid::zeroed(Order::ColumnMajor, 2, 4);
        for (r, c, v) in [(0, 0, 1), (0, 3, 2), (1, 0, -5), (1, 2, 7)] {
            let slot = grid.slot(r, c);
            grid.put_slot(slot, v);
        }
        assert_eq!(grid.row_total(0), 3);
        assert_eq!(grid.row_total(1), 2);
        assert_eq!(grid.column_total(0), -4);
        assert_eq!(grid.column_values(2).collect::<Vec<_>>(), vec![0, 7]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_column_past_width_panics_instead_of_aliasing() {
        let grid = Grid::zeroed(Order::RowMajor, 2, 4);
        grid.get(0, 4);
    }

    #[timeout(1000)]
    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty(Order::RowMajor);
        assert_eq!(grid.num_rows(), 0);
        assert_eq!(grid.num_cols(), 0);
    }
}
