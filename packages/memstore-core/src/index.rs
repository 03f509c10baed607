//! Ordered multimap index from a column value to the rows holding it.
//!
//! Buckets live in a `BTreeMap` keyed by value so range predicates walk only
//! the matching keys. Each bucket is a `BTreeSet` of row identifiers; a row
//! appears in at most one bucket per index. Buckets are created on first
//! insertion and pruned as soon as they become empty.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Bound;

/// Zero-based row identifier.
pub type RowId = usize;

/// Materialized set of row identifiers returned by index lookups.
pub type RowSet = BTreeSet<RowId>;

/// Value-ordered index over a single column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedIndex {
    buckets: BTreeMap<i32, RowSet>,
    entries: usize,
}

impl OrderedIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from a column's values, using each value's position
    /// as its row identifier.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut index = Self::new();
        for (row, value) in values.into_iter().enumerate() {
            index.insert(row, value);
        }
        index
    }

    /// Discards all buckets and re-indexes `values` by position.
    pub fn rebuild<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i32>,
    {
        *self = Self::from_values(values);
        tracing::trace!(
            distinct = self.buckets.len(),
            entries = self.entries,
            "Rebuilt ordered index"
        );
    }

    /// Adds `row` to the bucket for `value`, creating the bucket if needed.
    ///
    /// # Returns
    /// `true` if the row was not already present in that bucket.
    pub fn insert(&mut self, row: RowId, value: i32) -> bool {
        let inserted = self.buckets.entry(value).or_default().insert(row);
        if inserted {
            self.entries += 1;
        }
        inserted
    }

    /// Removes `row` from the bucket for `value`. Missing buckets or rows are
    /// a no-op.
    ///
    /// # Returns
    /// `true` if the row was present and has been removed.
    pub fn remove(&mut self, row: RowId, value: i32) -> bool {
        let Some(bucket) = self.buckets.get_mut(&value) else {
            return false;
        };
        let removed = bucket.remove(&row);
        if bucket.is_empty() {
            self.buckets.remove(&value);
        }
        if removed {
            self.entries -= 1;
        }
        removed
    }

    /// Moves `row` from the `old` bucket to the `new` bucket.
    ///
    /// Removing from `old` is a no-op when the row is not there, which covers
    /// the first write of a freshly zeroed row. When `old == new` the row
    /// ends up in that bucket exactly once.
    pub fn update(&mut self, row: RowId, old: i32, new: i32) {
        if old != new {
            self.remove(row, old);
        }
        self.insert(row, new);
    }

    /// Rows whose value is strictly below `threshold`.
    pub fn less_than(&self, threshold: i32) -> RowSet {
        self.collect((Bound::Unbounded, Bound::Excluded(threshold)))
    }

    /// Rows whose value is at most `threshold`.
    pub fn less_than_or_equal(&self, threshold: i32) -> RowSet {
        self.collect((Bound::Unbounded, Bound::Included(threshold)))
    }

    /// Rows whose value is above `threshold`; ties are included only when
    /// `strict` is `false`.
    pub fn greater_than(&self, threshold: i32, strict: bool) -> RowSet {
        let lower = if strict {
            Bound::Excluded(threshold)
        } else {
            Bound::Included(threshold)
        };
        self.collect((lower, Bound::Unbounded))
    }

    /// Rows whose value equals `value`.
    pub fn equal_to(&self, value: i32) -> RowSet {
        self.buckets.get(&value).cloned().unwrap_or_default()
    }

    /// Returns `true` if `row` is recorded under `value`.
    pub fn contains(&self, value: i32, row: RowId) -> bool {
        self.buckets
            .get(&value)
            .is_some_and(|bucket| bucket.contains(&row))
    }

    /// Number of distinct values currently indexed.
    pub fn distinct_values(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of (value, row) entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Iterates buckets in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &RowSet)> {
        self.buckets.iter().map(|(value, rows)| (*value, rows))
    }

    fn collect(&self, range: (Bound<i32>, Bound<i32>)) -> RowSet {
        self.buckets
            .range(range)
            .flat_map(|(_, rows)| rows.iter().copied())
            .collect()
    }
}

impl fmt::Display for OrderedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (value, rows) in &self.buckets {
            let rows: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
            writeln!(f, "{} -> [{}]", value, rows.join(", "))?;
        }
        Ok(())
    }
}
