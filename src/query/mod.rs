//! Multi-criteria catalog queries
//!
//! Filter state, per-catalog predicates, the query engine and price sorting.

pub mod normalize;
pub mod filter;
pub mod predicate;
pub mod engine;
pub mod sort;

#[cfg(test)]
#[path = "query_proptests.rs"]
mod proptests;

pub use normalize::{normalize, contains, same_key};
pub use filter::{FilterState, Mode, SortOrder};
pub use predicate::{Predicate, Gate};
pub use engine::QueryEngine;
pub use sort::sort_by_price;
