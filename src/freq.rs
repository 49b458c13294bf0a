//! String-keyed frequency tables.
//!
//! [`FreqTable`] backs every per-sender distribution: words, emoji, and the
//! four temporal groupings. Absent keys mean a count of zero; the table never
//! stores an explicit zero, so `total()` always equals the sum of the stored
//! values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Occurrence counts keyed by string.
///
/// # Example
///
/// ```
/// use whatstats::freq::FreqTable;
///
/// let mut table = FreqTable::new();
/// table.record("hello");
/// table.record("hello");
/// table.record("there");
///
/// assert_eq!(table.get("hello"), 2);
/// assert_eq!(table.get("absent"), 0);
/// assert_eq!(table.total(), 3);
/// assert_eq!(table.most_common(1), vec![("hello".to_string(), 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreqTable {
    counts: HashMap<String, u64>,
}

impl FreqTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `key`.
    pub fn record(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    /// Returns the count for `key`, zero when absent.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no occurrence has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the `n` highest counts, descending; ties break by key so the
    /// result is deterministic.
    ///
    /// Returns fewer than `n` entries (possibly none) when the table is
    /// smaller.
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> =
            self.counts.iter().map(|(k, &v)| (k.clone(), v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Returns the single highest entry, or `None` for an empty table.
    pub fn top(&self) -> Option<(String, u64)> {
        self.most_common(1).into_iter().next()
    }

    /// Iterates over `(key, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Adds every count from `other` into this table.
    pub fn merge(&mut self, other: &FreqTable) {
        for (key, count) in &other.counts {
            *self.counts.entry(key.clone()).or_insert(0) += count;
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FreqTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FreqTable::new();
        for key in iter {
            table.record(key);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut table = FreqTable::new();
        table.record("a");
        table.record("a");
        table.record("b");
        assert_eq!(table.get("a"), 2);
        assert_eq!(table.get("b"), 1);
        assert_eq!(table.get("c"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_no_zero_counts_stored() {
        let table: FreqTable = ["x", "y", "x"].into_iter().collect();
        assert!(table.iter().all(|(_, count)| count > 0));
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_most_common_ordering() {
        let table: FreqTable = ["b", "a", "b", "c", "b", "a"].into_iter().collect();
        assert_eq!(
            table.most_common(3),
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_most_common_tie_breaks_by_key() {
        let table: FreqTable = ["b", "a"].into_iter().collect();
        assert_eq!(
            table.most_common(2),
            vec![("a".to_string(), 1), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn test_most_common_empty_is_empty() {
        let table = FreqTable::new();
        assert!(table.most_common(5).is_empty());
        assert!(table.top().is_none());
    }

    #[test]
    fn test_top() {
        let table: FreqTable = ["a", "b", "b"].into_iter().collect();
        assert_eq!(table.top(), Some(("b".to_string(), 2)));
    }

    #[test]
    fn test_merge() {
        let mut left: FreqTable = ["a", "b"].into_iter().collect();
        let right: FreqTable = ["b", "c"].into_iter().collect();
        left.merge(&right);
        assert_eq!(left.get("a"), 1);
        assert_eq!(left.get("b"), 2);
        assert_eq!(left.get("c"), 1);
        assert_eq!(left.total(), 4);
    }

    #[test]
    fn test_serde_transparent_map() {
        let table: FreqTable = ["hello", "hello"].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"hello":2}"#);
        let parsed: FreqTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }
}
