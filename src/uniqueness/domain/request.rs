//! Per-attribute validation request.

use super::{AttributeName, AttributeValue, RecordRef};

/// One attribute value of one record, ready to validate.
///
/// Requests are built by the record layer immediately before validation and
/// dropped once the outcome is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    record: RecordRef,
    attribute: AttributeName,
    value: AttributeValue,
}

impl ValidationRequest {
    /// Creates a validation request.
    #[must_use]
    pub const fn new(record: RecordRef, attribute: AttributeName, value: AttributeValue) -> Self {
        Self {
            record,
            attribute,
            value,
        }
    }

    /// Returns the record under validation.
    #[must_use]
    pub const fn record(&self) -> &RecordRef {
        &self.record
    }

    /// Returns the attribute under validation.
    #[must_use]
    pub const fn attribute(&self) -> &AttributeName {
        &self.attribute
    }

    /// Returns the raw attribute value.
    #[must_use]
    pub const fn value(&self) -> &AttributeValue {
        &self.value
    }
}
