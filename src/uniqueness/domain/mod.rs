//! Domain model for index-backed uniqueness validation.
//!
//! Every value here is transient and request-scoped: rules are configured
//! once at setup, requests and outcomes live for a single validation call.
//! No infrastructure concerns cross this boundary.

mod cardinality;
mod error;
mod names;
mod options;
mod outcome;
mod record;
mod request;
mod rule;
mod scope;
mod value;

pub use cardinality::CardinalityMode;
pub use error::{DomainError, RuleConfigurationError};
pub use names::{AttributeName, IdentityFieldName, IndexedFieldName, ModelName};
pub use options::{QueryFailurePolicy, UniquenessOptions};
pub use outcome::{ValidationOutcome, Violation, ViolationKind};
pub use record::{RecordId, RecordRef};
pub use request::ValidationRequest;
pub use rule::{RuleDeclaration, UniquenessRule};
pub use scope::ModelScope;
pub use value::{AttributeValue, ScalarValue};
