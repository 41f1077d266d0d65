//! Index lag tests for [`InMemorySearchIndex`].
//!
//! Uniqueness is judged by the index, so a record saved but not yet
//! indexed is invisible. These tests pin that behaviour down as a known
//! false negative.

use crate::in_memory::helpers::{email_attributes, email_validator, index, index_email, runtime};
use indexed_validations::uniqueness::{
    adapters::memory::InMemorySearchIndex, domain::RecordRef,
};
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Tests that a colliding record missing from the index goes unnoticed.
#[rstest]
fn unindexed_collision_passes(runtime: io::Result<Runtime>, index: Arc<InMemorySearchIndex>) {
    let rt = runtime.expect("runtime creation");
    let validator = email_validator(Arc::clone(&index));

    // Both records validate before either is indexed.
    let first = rt
        .block_on(validator.validate(&RecordRef::new_record(), &email_attributes("a@x.com")))
        .expect("validation");
    let second = rt
        .block_on(validator.validate(&RecordRef::new_record(), &email_attributes("a@x.com")))
        .expect("validation");

    assert!(first.is_valid());
    assert!(second.is_valid());
}

/// Tests that the collision is caught once the index catches up.
#[rstest]
fn collision_is_detected_after_indexing(
    runtime: io::Result<Runtime>,
    index: Arc<InMemorySearchIndex>,
) {
    let rt = runtime.expect("runtime creation");
    let validator = email_validator(Arc::clone(&index));
    index_email(&index, "1", "a@x.com").expect("index first record");

    let outcome = rt
        .block_on(validator.validate(&RecordRef::new_record(), &email_attributes("a@x.com")))
        .expect("validation");

    assert!(!outcome.is_valid());
}

/// Tests that exact matching misses values differing only in case.
#[rstest]
fn differently_cased_value_is_not_matched(
    runtime: io::Result<Runtime>,
    index: Arc<InMemorySearchIndex>,
) {
    let rt = runtime.expect("runtime creation");
    index_email(&index, "1", "A@X.com").expect("index record");
    let validator = email_validator(Arc::clone(&index));

    let outcome = rt
        .block_on(validator.validate(&RecordRef::new_record(), &email_attributes("a@x.com")))
        .expect("validation");

    assert!(outcome.is_valid());
}
