//! Filter (Search) Layer
//!
//! Reduces the full record set to those matching a free-text query.
//! Matching is case-insensitive substring, OR across the record type's
//! searchable fields. The empty query is the identity. Ordering is not
//! this layer's concern.

use crate::table::TableRow;

/// Return the subset of `records` matching `query`.
///
/// An empty (or whitespace-only) query returns the full collection.
pub fn search<R: TableRow>(records: &[R], query: &str) -> Vec<R> {
    let query = query.trim();
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches(*r, &needle))
        .cloned()
        .collect()
}

/// Whether any searchable field of `record` contains `needle`.
///
/// `needle` must already be lowercased; fields are lowercased per check so
/// absent fields (empty strings) simply never match.
pub fn matches<R: TableRow>(record: &R, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
