//! In-memory adapters for uniqueness validation tests and embedders.

mod search_index;

pub use search_index::{InMemorySearchIndex, IndexedDocument};
