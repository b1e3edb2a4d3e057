//! List Pipeline
//!
//! Shared filter + paginate pipeline behind every list screen:
//! fetched collection -> criteria filter -> page slice -> view.

mod controller;
mod filter;
mod paginate;
mod signals;

pub use paginate::{page_range_label, paginate, total_pages};
pub use signals::ListingSignals;

/// Fields a record exposes to the filter predicate
pub trait Filterable {
    /// Stable unique identifier
    fn id(&self) -> u32;

    /// Fields searched by the free-text query
    fn search_fields(&self) -> Vec<&str>;

    /// Matched exactly against the selected category
    fn category_id(&self) -> Option<u32> {
        None
    }

    /// Matched against the multi-select value set
    fn discriminant(&self) -> Option<&str> {
        None
    }

    /// Matched against the numeric range
    fn numeric_value(&self) -> Option<f64> {
        None
    }
}
