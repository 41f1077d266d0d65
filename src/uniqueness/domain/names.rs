//! Validated names for model attributes and index fields.

use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a model attribute under validation (e.g. `email`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttributeName(String);

impl AttributeName {
    /// Creates a validated attribute name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyAttributeName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyAttributeName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the attribute name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AttributeName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AttributeName> for String {
    fn from(name: AttributeName) -> Self {
        name.0
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the field in the search index that mirrors an attribute.
///
/// Index schemas frequently encode type and storage in a suffix, so the
/// name is kept verbatim apart from trimming (e.g. `email_ssim`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IndexedFieldName(String);

impl IndexedFieldName {
    /// Creates a validated indexed field name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyIndexedFieldName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyIndexedFieldName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the field name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IndexedFieldName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IndexedFieldName> for String {
    fn from(name: IndexedFieldName) -> Self {
        name.0
    }
}

impl fmt::Display for IndexedFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the index field holding each document's record identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityFieldName(String);

impl IdentityFieldName {
    /// Field name used by most search index schemas.
    pub const DEFAULT: &'static str = "id";

    /// Creates a validated identity field name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyIdentityFieldName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyIdentityFieldName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the field name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IdentityFieldName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl TryFrom<String> for IdentityFieldName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdentityFieldName> for String {
    fn from(name: IdentityFieldName) -> Self {
        name.0
    }
}

impl fmt::Display for IdentityFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Model type a record belongs to, as stored in the index (e.g. `User`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelName(String);

impl ModelName {
    /// Creates a validated model name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyModelName`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyModelName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the model name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModelName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelName> for String {
    fn from(name: ModelName) -> Self {
        name.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
