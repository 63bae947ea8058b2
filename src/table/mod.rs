//! Tabular Data View Engine
//!
//! Takes a resident collection of derived records and presents a searched,
//! sorted, paginated slice. The pipeline is pure and synchronous:
//!
//! ```text
//! records → filter (search) → sort → paginate → visible rows
//! ```
//!
//! Collections are owned by a single task and replaced wholesale; none of
//! these stages mutate their input in place.
//!
//! - [`filter`]: free-text search over a fixed set of fields
//! - [`sort`]: stable ordering by a named key and direction
//! - [`paginate`]: fixed-size 1-indexed pages
//! - [`view`]: serializable view state and the composed table component

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod view;

pub use filter::search;
pub use paginate::{page_count, page_slice};
pub use sort::{sort_rows, SortDirection, SortValue};
pub use view::{compose, TableSlice, TableView, ViewState};

/// A record the table engine can drive.
///
/// Implementations guarantee a homogeneous [`SortValue`] variant per sort
/// key (a column never mixes text and numbers) and never panic on a key
/// they don't recognize.
pub trait TableRow: Clone {
    /// Stable row identity; used as the table row key
    fn id(&self) -> &str;

    /// The fixed set of fields free-text search matches against.
    /// Absent fields are represented as empty strings, never skipped.
    fn search_fields(&self) -> Vec<&str>;

    /// Value to order by for the given sort key.
    /// Unknown keys yield [`SortValue::Missing`].
    fn sort_value(&self, key: &str) -> SortValue;

    /// Sort keys this record type accepts, for boundary validation
    fn sort_keys() -> &'static [&'static str];

    /// Key used when the caller specifies none
    fn default_sort_key() -> &'static str;
}
