//! Uniqueness scenarios against [`InMemorySearchIndex`].

use crate::in_memory::helpers::{
    email, email_attributes, email_validator, index, index_email, record_id, runtime,
};
use indexed_validations::uniqueness::{
    adapters::memory::{InMemorySearchIndex, IndexedDocument},
    domain::{AttributeValue, RecordRef, UniquenessOptions, ViolationKind},
    services::RecordValidator,
};
use rstest::rstest;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Tests that two values for a single-valued rule are rejected outright.
#[rstest]
fn multiple_values_are_rejected(runtime: io::Result<Runtime>, index: Arc<InMemorySearchIndex>) {
    let rt = runtime.expect("runtime creation");
    let validator = email_validator(index);
    let values = email_attributes(AttributeValue::sequence(["a@x.com", "b@x.com"]));

    let outcome = rt
        .block_on(validator.validate(&RecordRef::new_record(), &values))
        .expect("validation");

    assert_eq!(
        outcome.full_messages(),
        vec!["email can't have more than one value"]
    );
}

/// Tests that a fresh value on a new record is valid.
#[rstest]
fn new_record_with_unused_value_is_valid(
    runtime: io::Result<Runtime>,
    index: Arc<InMemorySearchIndex>,
) {
    let rt = runtime.expect("runtime creation");
    index_email(&index, "7", "someone@x.com").expect("index record");
    let validator = email_validator(index);

    let outcome = rt
        .block_on(validator.validate(&RecordRef::new_record(), &email_attributes("a@x.com")))
        .expect("validation");

    assert!(outcome.is_valid());
}

/// Tests that a value held by another record is taken.
#[rstest]
fn new_record_with_used_value_is_taken(
    runtime: io::Result<Runtime>,
    index: Arc<InMemorySearchIndex>,
) {
    let rt = runtime.expect("runtime creation");
    index_email(&index, "7", "a@x.com").expect("index record");
    let validator = email_validator(index);

    let outcome = rt
        .block_on(validator.validate(&RecordRef::new_record(), &email_attributes("a@x.com")))
        .expect("validation");

    assert!(outcome.has(&email(), ViolationKind::AlreadyTaken));
}

/// Tests that revalidating a saved record does not collide with itself.
#[rstest]
fn persisted_record_matching_only_itself_is_valid(
    runtime: io::Result<Runtime>,
    index: Arc<InMemorySearchIndex>,
) {
    let rt = runtime.expect("runtime creation");
    index_email(&index, "42", "a@x.com").expect("index record");
    let validator = email_validator(index);

    let outcome = rt
        .block_on(validator.validate(
            &RecordRef::persisted(record_id("42")),
            &email_attributes("a@x.com"),
        ))
        .expect("validation");

    assert!(outcome.is_valid());
}

/// Tests that a saved record still collides with a different record.
#[rstest]
fn persisted_record_matching_another_record_is_taken(
    runtime: io::Result<Runtime>,
    index: Arc<InMemorySearchIndex>,
) {
    let rt = runtime.expect("runtime creation");
    index_email(&index, "42", "a@x.com").expect("index record");
    index_email(&index, "43", "a@x.com").expect("index record");
    let validator = email_validator(index);

    let outcome = rt
        .block_on(validator.validate(
            &RecordRef::persisted(record_id("42")),
            &email_attributes("a@x.com"),
        ))
        .expect("validation");

    assert!(outcome.has(&email(), ViolationKind::AlreadyTaken));
}

/// Tests that an empty multi-valued attribute matches records with no value.
#[rstest]
fn empty_sequence_collides_with_unset_field(
    runtime: io::Result<Runtime>,
    index: Arc<InMemorySearchIndex>,
) {
    let rt = runtime.expect("runtime creation");
    index
        .index_document(
            record_id("9"),
            IndexedDocument::new().with_field("title_tesim", "No email"),
        )
        .expect("index record");
    let validator = email_validator(index);

    let outcome = rt
        .block_on(validator.validate(
            &RecordRef::new_record(),
            &email_attributes(AttributeValue::Sequence(Vec::new())),
        ))
        .expect("validation");

    assert!(outcome.has(&email(), ViolationKind::AlreadyTaken));
}

/// Tests that a model-scoped rule ignores records of other models sharing
/// the index.
#[rstest]
fn value_held_by_another_model_is_not_taken(
    runtime: io::Result<Runtime>,
    index: Arc<InMemorySearchIndex>,
) {
    let rt = runtime.expect("runtime creation");
    index
        .index_document(
            record_id("collection:1"),
            IndexedDocument::new()
                .with_field("has_model_ssim", "Collection")
                .with_field("email_ssim", "a@x.com"),
        )
        .expect("index record");
    let validator = RecordValidator::new(index)
        .validates_uniqueness_of(["email"], UniquenessOptions::new("email_ssim").with_model("User"))
        .expect("valid email declaration");

    let outcome = rt
        .block_on(validator.validate(&RecordRef::new_record(), &email_attributes("a@x.com")))
        .expect("validation");

    assert!(outcome.is_valid());
}
