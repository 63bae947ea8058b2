//! Sort Layer
//!
//! Orders a filtered collection by a named sort key and direction.
//! Stability is guaranteed by decorate-sort-undecorate: each row is
//! decorated with its original index, the index breaks ties, and the
//! decoration is stripped afterwards. This holds regardless of the
//! stability of the underlying sort primitive.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::table::TableRow;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction; used by the toggle rule
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// Typed comparison value for one row under one sort key.
///
/// A column is homogeneous: every row of a record type yields the same
/// variant for a given key (the caller's contract), so cross-variant
/// comparison only arises for `Missing` and degrades to a fixed rank.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    /// Milliseconds since epoch
    Date(i64),
    /// Absent field or unknown key; orders after every present value
    Missing,
}

impl SortValue {
    /// Total ordering used by the sorter.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        use SortValue::*;
        match (self, other) {
            (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Number(a), Number(b)) => a.total_cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Greater,
            (_, Missing) => Ordering::Less,
            // Heterogeneous columns violate the caller contract; rank by
            // variant so ordering stays total instead of panicking
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Text(_) => 0,
            SortValue::Number(_) => 1,
            SortValue::Date(_) => 2,
            SortValue::Missing => 3,
        }
    }
}

/// Sort `rows` by `key` in the given direction, stably.
///
/// Equal-key rows keep their relative order from the input in both
/// directions: the original-index tiebreak is always ascending.
pub fn sort_rows<R: TableRow>(rows: Vec<R>, key: &str, direction: SortDirection) -> Vec<R> {
    // Decorate with original index
    let mut decorated: Vec<(usize, SortValue, R)> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let value = row.sort_value(key);
            (index, value, row)
        })
        .collect();

    decorated.sort_unstable_by(|a, b| {
        let ord = match direction {
            SortDirection::Ascending => a.1.compare(&b.1),
            SortDirection::Descending => b.1.compare(&a.1),
        };
        ord.then_with(|| a.0.cmp(&b.0))
    });

    // Undecorate
    decorated.into_iter().map(|(_, _, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        amount: Option<f64>,
    }

    impl TableRow for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }

        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "name" => SortValue::Text(self.name.clone()),
                "amount" => self
                    .amount
                    .map(SortValue::Number)
                    .unwrap_or(SortValue::Missing),
                _ => SortValue::Missing,
            }
        }

        fn sort_keys() -> &'static [&'static str] {
            &["name", "amount"]
        }

        fn default_sort_key() -> &'static str {
            "name"
        }
    }

    fn row(id: &str, name: &str, amount: Option<f64>) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            amount,
        }
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_ascending_and_descending() {
        let rows = vec![
            row("1", "Bravo", Some(20.0)),
            row("2", "Alpha", Some(30.0)),
            row("3", "Charlie", Some(10.0)),
        ];

        let asc = sort_rows(rows.clone(), "name", SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["2", "1", "3"]);

        let desc = sort_rows(rows, "amount", SortDirection::Descending);
        assert_eq!(ids(&desc), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_stability_on_equal_keys() {
        let rows = vec![
            row("1", "Same", Some(1.0)),
            row("2", "Same", Some(2.0)),
            row("3", "Same", Some(3.0)),
            row("4", "Aaa", Some(4.0)),
        ];

        // Equal names keep input order in both directions
        let asc = sort_rows(rows.clone(), "name", SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["4", "1", "2", "3"]);

        let desc = sort_rows(rows, "name", SortDirection::Descending);
        assert_eq!(ids(&desc), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let rows = vec![
            row("1", "Bravo", None),
            row("2", "Alpha", None),
            row("3", "Alpha", None),
        ];

        let once = sort_rows(rows, "name", SortDirection::Ascending);
        let twice = sort_rows(once.clone(), "name", SortDirection::Ascending);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_missing_values_sort_last() {
        let rows = vec![
            row("1", "A", None),
            row("2", "B", Some(5.0)),
            row("3", "C", Some(1.0)),
        ];

        let asc = sort_rows(rows, "amount", SortDirection::Ascending);
        assert_eq!(ids(&asc), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_unknown_key_leaves_order_intact() {
        let rows = vec![
            row("1", "B", None),
            row("2", "A", None),
        ];

        // Every row yields Missing: all equal, stability preserves input order
        let sorted = sort_rows(rows, "nonsense", SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec!["1", "2"]);
    }

    #[test]
    fn test_text_compare_is_case_insensitive() {
        let rows = vec![
            row("1", "beta", None),
            row("2", "Alpha", None),
        ];

        let sorted = sort_rows(rows, "name", SortDirection::Ascending);
        assert_eq!(ids(&sorted), vec!["2", "1"]);
    }

    #[test]
    fn test_empty_collection() {
        let sorted = sort_rows(Vec::<Row>::new(), "name", SortDirection::Ascending);
        assert!(sorted.is_empty());
    }
}
