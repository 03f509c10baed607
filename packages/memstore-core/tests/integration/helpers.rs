//! Shared fixtures for the integration tests.

use memstore_core::data::MemoryLoader;
use memstore_core::table::DEFAULT_INDEXED_COLUMNS;
use memstore_core::{Layout, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Three-row, four-column dataset used by the end-to-end scenarios.
pub fn scenario_rows() -> Vec<Vec<i32>> {
    vec![vec![5, 10, 1, 0], vec![15, 2, 9, 0], vec![3, 20, 0, 0]]
}

/// Generates `num_rows` rows of values in `[-max_value, max_value]`.
///
/// A small value range produces many duplicate keys in the indexes.
pub fn random_rows(seed: u64, num_rows: usize, num_cols: usize, max_value: i32) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_rows)
        .map(|_| {
            (0..num_cols)
                .map(|_| rng.gen_range(-max_value..=max_value))
                .collect()
        })
        .collect()
}

/// Loads `rows` into a fresh table of every layout.
pub fn load_all(num_cols: usize, rows: &[Vec<i32>]) -> Vec<Box<dyn Table>> {
    let loader = MemoryLoader::new(num_cols, rows.to_vec()).unwrap();
    Layout::ALL
        .iter()
        .map(|layout| {
            let mut table = layout.create(&DEFAULT_INDEXED_COLUMNS);
            table.load_from(&loader);
            table
        })
        .collect()
}
