//! Application services for index-backed uniqueness validation.

mod record;
mod validator;

pub use record::{RecordAttributes, RecordValidator};
pub use validator::{UniquenessValidationError, UniquenessValidationResult, UniquenessValidator};
