//! Port contracts for uniqueness validation.
//!
//! Ports define infrastructure-agnostic interfaces used by uniqueness
//! services.

pub mod search_index;

#[cfg(test)]
pub use search_index::MockSearchIndex;
pub use search_index::{ExistenceQuery, IndexQueryError, IndexQueryResult, SearchIndex};
