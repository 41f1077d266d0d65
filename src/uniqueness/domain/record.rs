//! Identity and persistence state of the record under validation.

use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a record, as stored in the index identity field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Creates a record identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyRecordId`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyRecordId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The record a validation runs against.
///
/// Only persisted records are excluded from their own uniqueness query. A
/// new record may already carry an identifier (some stores mint identifiers
/// before the first save), but it has no indexed document yet and is never
/// excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecordRef {
    /// A record that has not been saved yet.
    New {
        /// Identifier minted ahead of the first save, if any.
        id: Option<RecordId>,
    },
    /// A record with a stable identity in the primary store.
    Persisted {
        /// Stable identity of the record.
        id: RecordId,
    },
}

impl RecordRef {
    /// Creates a reference to an unsaved record without an identifier.
    #[must_use]
    pub const fn new_record() -> Self {
        Self::New { id: None }
    }

    /// Creates a reference to an unsaved record with a pre-assigned
    /// identifier.
    #[must_use]
    pub const fn new_with_id(id: RecordId) -> Self {
        Self::New { id: Some(id) }
    }

    /// Creates a reference to a persisted record.
    #[must_use]
    pub const fn persisted(id: RecordId) -> Self {
        Self::Persisted { id }
    }

    /// Returns the record identifier, if one is known.
    #[must_use]
    pub const fn id(&self) -> Option<&RecordId> {
        match self {
            Self::New { id } => id.as_ref(),
            Self::Persisted { id } => Some(id),
        }
    }

    /// Returns `true` when the record has been saved.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted { .. })
    }

    /// Returns the identity to exclude from a uniqueness query.
    #[must_use]
    pub const fn self_exclusion(&self) -> Option<&RecordId> {
        match self {
            Self::New { .. } => None,
            Self::Persisted { id } => Some(id),
        }
    }
}

impl Default for RecordRef {
    fn default() -> Self {
        Self::new_record()
    }
}
