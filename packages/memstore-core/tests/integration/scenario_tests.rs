//! End-to-end query scenarios over a three-row dataset.

use memstore_core::table::AggregatedColumnTable;
use memstore_core::Table;

use super::helpers::{load_all, scenario_rows};

/// SELECT SUM(col0) and the two-predicate sum
#[test]
fn test_column_sums() {
    for table in load_all(4, &scenario_rows()) {
        assert_eq!(table.column_sum(), 23, "{}", table.layout());
        // row0 (10 > 5, 1 < 5) and row2 (20 > 5, 0 < 5) qualify
        assert_eq!(table.predicated_column_sum(5, 5), 8, "{}", table.layout());
    }
}

/// SUM of all columns over rows with col0 > 4
#[test]
fn test_all_columns_sum() {
    for table in load_all(4, &scenario_rows()) {
        assert_eq!(table.predicated_all_columns_sum(4), 16 + 26, "{}", table.layout());
    }
}

/// UPDATE col3 = col3 + col2 WHERE col0 < 10
#[test]
fn test_predicated_update() {
    for mut table in load_all(4, &scenario_rows()) {
        assert_eq!(table.predicated_update(10), 2, "{}", table.layout());
        assert_eq!(table.get_int_field(0, 3), 1);
        assert_eq!(table.get_int_field(2, 3), 0);
        assert_eq!(table.column_sum(), 23);
    }

    let mut aggregated = AggregatedColumnTable::new();
    aggregated.load(4, &scenario_rows());
    aggregated.predicated_update(10);
    assert_eq!(aggregated.column_total(3), 1);
    assert!(aggregated.aggregates_consistent());
}
