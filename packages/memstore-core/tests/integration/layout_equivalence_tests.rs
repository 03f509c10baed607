//! All layouts must return identical results for the same data.

use memstore_core::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::helpers::{load_all, random_rows};

fn assert_same_fields(tables: &[Box<dyn Table>]) {
    let reference = &tables[0];
    for table in &tables[1..] {
        assert_eq!(table.num_rows(), reference.num_rows());
        assert_eq!(table.num_cols(), reference.num_cols());
        for r in 0..reference.num_rows() {
            for c in 0..reference.num_cols() {
                assert_eq!(
                    table.get_int_field(r, c),
                    reference.get_int_field(r, c),
                    "{} vs {} at ({}, {})",
                    table.layout(),
                    reference.layout(),
                    r,
                    c
                );
            }
        }
    }
}

#[test]
fn test_queries_agree_across_layouts() {
    for (seed, num_cols, max_value) in [(1, 4, 5), (2, 6, 100), (3, 10, 1_000_000)] {
        let rows = random_rows(seed, 300, num_cols, max_value);
        let tables = load_all(num_cols, &rows);
        assert_same_fields(&tables);

        let mut rng = StdRng::seed_from_u64(seed + 100);
        for _ in 0..50 {
            let t1 = rng.gen_range(-max_value - 1..=max_value + 1);
            let t2 = rng.gen_range(-max_value - 1..=max_value + 1);

            let expected = (
                tables[0].column_sum(),
                tables[0].predicated_column_sum(t1, t2),
                tables[0].predicated_all_columns_sum(t1),
            );
            for table in &tables[1..] {
                let got = (
                    table.column_sum(),
                    table.predicated_column_sum(t1, t2),
                    table.predicated_all_columns_sum(t1),
                );
                assert_eq!(got, expected, "{} seed={} t1={} t2={}", table.layout(), seed, t1, t2);
            }
        }
    }
}

#[test]
fn test_updates_agree_across_layouts() {
    let rows = random_rows(7, 250, 5, 20);
    let mut tables = load_all(5, &rows);
    let mut rng = StdRng::seed_from_u64(8);

    for round in 0..40 {
        let threshold = rng.gen_range(-25..=25);
        let counts: Vec<usize> = tables
            .iter_mut()
            .map(|table| table.predicated_update(threshold))
            .collect();
        assert!(
            counts.windows(2).all(|w| w[0] == w[1]),
            "round {} threshold {}: {:?}",
            round,
            threshold,
            counts
        );

        // Interleave point writes so the update column and the predicate
        // columns keep moving.
        let (r, c, v) = (
            rng.gen_range(0..rows.len()),
            rng.gen_range(0..5),
            rng.gen_range(-20..=20),
        );
        for table in tables.iter_mut() {
            table.put_int_field(r, c, v);
        }

        let sums: Vec<i64> = tables
            .iter()
            .map(|table| table.predicated_all_columns_sum(threshold))
            .collect();
        assert!(sums.windows(2).all(|w| w[0] == w[1]), "{:?}", sums);
    }
    assert_same_fields(&tables);
}
