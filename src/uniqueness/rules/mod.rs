//! Stateless rule functions composed by the uniqueness services.
//!
//! Each rule is a plain function that returns the violation it found, if
//! any. Callers decide how violations are accumulated; any rule needing a
//! cardinality check calls [`check_cardinality`] directly.

mod cardinality;
mod uniqueness;

pub use cardinality::check_cardinality;
pub use uniqueness::{build_existence_query, check_uniqueness};
