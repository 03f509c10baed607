//! Index completeness and aggregate consistency under random writes.

use memstore_core::index::OrderedIndex;
use memstore_core::table::{AggregatedColumnTable, IndexedRowTable};
use memstore_core::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::helpers::random_rows;

const ROWS: usize = 200;
const COLS: usize = 6;

#[test]
fn test_aggregates_match_brute_force() {
    let mut table = AggregatedColumnTable::new();
    table.load(COLS, &random_rows(11, ROWS, COLS, 1000));
    assert!(table.aggregates_consistent());

    let mut rng = StdRng::seed_from_u64(12);
    for step in 0..2_000 {
        let (r, c) = (rng.gen_range(0..ROWS), rng.gen_range(0..COLS));
        table.put_int_field(r, c, rng.gen());
        if step % 97 == 0 {
            table.predicated_update(rng.gen_range(-1000..1000));
        }
    }

    assert!(table.aggregates_consistent());
    let brute: i64 = (0..ROWS).map(|r| table.get_int_field(r, 0) as i64).sum();
    assert_eq!(table.column_sum(), brute);
    for r in 0..ROWS {
        let row: i64 = (0..COLS).map(|c| table.get_int_field(r, c) as i64).sum();
        assert_eq!(table.row_sum(r), row);
    }
}

#[test]
fn test_index_buckets_match_fields() {
    let mut table = IndexedRowTable::with_indexed_columns(&[0, 2, 3]);
    table.load(COLS, &random_rows(21, ROWS, COLS, 8));

    let mut rng = StdRng::seed_from_u64(22);
    for step in 0..3_000 {
        let (r, c) = (rng.gen_range(0..ROWS), rng.gen_range(0..COLS));
        table.put_int_field(r, c, rng.gen_range(-8..=8));
        if step % 50 == 0 {
            table.predicated_update(rng.gen_range(-8..=8));
        }
    }

    assert!(table.indexes_consistent());
    for &col in table.indexed_columns() {
        let index = table.index(col).unwrap();
        assert_eq!(index.len(), ROWS);
        for r in 0..ROWS {
            let value = table.get_int_field(r, col);
            // Present in its own bucket and in no other.
            let holders: Vec<i32> = index
                .iter()
                .filter(|(_, rows)| rows.contains(&r))
                .map(|(key, _)| key)
                .collect();
            assert_eq!(holders, vec![value], "row {} col {}", r, col);
        }
        assert!(index.iter().all(|(_, rows)| !rows.is_empty()));
    }

    // An index rebuilt from scratch must equal the incrementally maintained one.
    let expected = OrderedIndex::from_values((0..ROWS).map(|r| table.get_int_field(r, 0)));
    assert_eq!(table.index(0), Some(&expected));
}

#[test]
fn test_index_ranges_match_scans() {
    let rows = random_rows(31, ROWS, 4, 30);
    let index = OrderedIndex::from_values(rows.iter().map(|row| row[0]));

    for threshold in -31..=31 {
        let below: Vec<usize> = (0..ROWS).filter(|&r| rows[r][0] < threshold).collect();
        let above: Vec<usize> = (0..ROWS).filter(|&r| rows[r][0] > threshold).collect();
        let at_or_above: Vec<usize> = (0..ROWS).filter(|&r| rows[r][0] >= threshold).collect();

        assert_eq!(index.less_than(threshold).into_iter().collect::<Vec<_>>(), below);
        assert_eq!(index.greater_than(threshold, true).into_iter().collect::<Vec<_>>(), above);
        assert_eq!(
            index.greater_than(threshold, false).into_iter().collect::<Vec<_>>(),
            at_or_above
        );
    }
}
