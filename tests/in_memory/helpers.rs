//! Shared test helpers for in-memory search index integration tests.

use indexed_validations::uniqueness::{
    adapters::memory::{InMemorySearchIndex, IndexedDocument},
    domain::{AttributeName, AttributeValue, RecordId, UniquenessOptions},
    services::{RecordAttributes, RecordValidator},
};
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh, empty search index for each test.
#[fixture]
pub fn index() -> Arc<InMemorySearchIndex> {
    Arc::new(InMemorySearchIndex::new())
}

/// Builds a record validator enforcing a unique `email` mirrored by
/// `email_ssim`.
///
/// # Panics
///
/// Panics if the declaration is rejected.
#[must_use]
pub fn email_validator(index: Arc<InMemorySearchIndex>) -> RecordValidator<InMemorySearchIndex> {
    RecordValidator::new(index)
        .validates_uniqueness_of(["email"], UniquenessOptions::new("email_ssim"))
        .expect("valid email declaration")
}

/// Parses a record identifier.
///
/// # Panics
///
/// Panics if the identifier is blank.
#[must_use]
pub fn record_id(value: &str) -> RecordId {
    RecordId::new(value).expect("valid record id")
}

/// Returns the `email` attribute name.
///
/// # Panics
///
/// Panics if the name is rejected.
#[must_use]
pub fn email() -> AttributeName {
    AttributeName::new("email").expect("valid attribute name")
}

/// Builds record attributes holding only `email`.
#[must_use]
pub fn email_attributes(value: impl Into<AttributeValue>) -> RecordAttributes {
    RecordAttributes::from([(email(), value.into())])
}

/// Indexes a record whose `email_ssim` field holds `value`.
///
/// # Errors
///
/// Returns an error if the index rejects the document.
pub fn index_email(
    index: &InMemorySearchIndex,
    id: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    index.index_document(
        record_id(id),
        IndexedDocument::new().with_field("email_ssim", value),
    )?;
    Ok(())
}
