//! Error types for uniqueness domain values and rule configuration.

use thiserror::Error;

/// Errors returned while constructing uniqueness domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The attribute name is empty after trimming.
    #[error("attribute name must not be empty")]
    EmptyAttributeName,

    /// The indexed field name is empty after trimming.
    #[error("indexed field name must not be empty")]
    EmptyIndexedFieldName,

    /// The identity field name is empty after trimming.
    #[error("identity field name must not be empty")]
    EmptyIdentityFieldName,

    /// The model name is empty after trimming.
    #[error("model name must not be empty")]
    EmptyModelName,

    /// The record identifier is empty after trimming.
    #[error("record identifier must not be empty")]
    EmptyRecordId,
}

/// Errors raised when a uniqueness rule is declared with invalid options.
///
/// These are setup-time failures: a rule that fails construction never
/// validates any record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleConfigurationError {
    /// The rule was declared without an indexed field name.
    #[error("uniqueness rule requires an indexed field name")]
    MissingIndexedField,

    /// The rule was declared without any attribute.
    #[error("uniqueness rule requires exactly one attribute, none given")]
    NoAttributes,

    /// The rule was declared for more than one attribute.
    #[error("uniqueness rule accepts only a single attribute: {}", .0.join(", "))]
    MultipleAttributes(Vec<String>),

    /// The bound attribute name is invalid.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(DomainError),

    /// The identity field name is invalid.
    #[error("invalid identity field: {0}")]
    InvalidIdentityField(DomainError),

    /// The model scope names an empty model.
    #[error("invalid model scope: {0}")]
    InvalidModel(DomainError),

    /// The model scope names an empty model field.
    #[error("invalid model field: {0}")]
    InvalidModelField(DomainError),
}
