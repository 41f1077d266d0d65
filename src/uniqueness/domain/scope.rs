//! Restriction of uniqueness queries to one model type.

use super::{IndexedFieldName, ModelName};

/// Limits an existence query to documents of one model type.
///
/// Indexes shared by several models tag each document with its model in a
/// dedicated field. Without a scope a value held by a record of any model
/// counts as taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelScope {
    field: IndexedFieldName,
    model: ModelName,
}

impl ModelScope {
    /// Index field holding the model type in most repository schemas.
    pub const DEFAULT_FIELD: &'static str = "has_model_ssim";

    /// Creates a scope matching documents whose `field` holds `model`.
    #[must_use]
    pub const fn new(field: IndexedFieldName, model: ModelName) -> Self {
        Self { field, model }
    }

    /// Returns the index field holding the model type.
    #[must_use]
    pub const fn field(&self) -> &IndexedFieldName {
        &self.field
    }

    /// Returns the model type matched by the scope.
    #[must_use]
    pub const fn model(&self) -> &ModelName {
        &self.model
    }
}
