//! Index-backed uniqueness validation.
//!
//! Enforces that an attribute holds a single value and that no other record
//! holds the same value, where "other records" are looked up in a search
//! index that mirrors the primary store. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Rule functions in [`rules`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Limitations
//!
//! The index may lag behind the primary store or analyse field values, so a
//! taken value can be judged unique. Concurrent validations of the same
//! value are not serialised either. Strict uniqueness needs a constraint in
//! the primary store.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use indexed_validations::uniqueness::{
//!     adapters::memory::{InMemorySearchIndex, IndexedDocument},
//!     domain::{AttributeName, RecordId, RecordRef, UniquenessOptions, ViolationKind},
//!     services::{RecordAttributes, RecordValidator},
//! };
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().expect("runtime").block_on(async {
//! let index = Arc::new(InMemorySearchIndex::new());
//! index
//!     .index_document(
//!         RecordId::new("7").expect("valid id"),
//!         IndexedDocument::new().with_field("email_ssim", "a@x.com"),
//!     )
//!     .expect("index document");
//!
//! let validator = RecordValidator::new(index)
//!     .validates_uniqueness_of(["email"], UniquenessOptions::new("email_ssim"))
//!     .expect("valid declaration");
//!
//! let email = AttributeName::new("email").expect("valid name");
//! let mut attributes = RecordAttributes::new();
//! attributes.insert(email.clone(), "a@x.com".into());
//!
//! let outcome = validator
//!     .validate(&RecordRef::new_record(), &attributes)
//!     .await
//!     .expect("index answers");
//! assert!(outcome.has(&email, ViolationKind::AlreadyTaken));
//! assert_eq!(outcome.full_messages(), vec!["email has already been taken"]);
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod rules;
pub mod services;

#[cfg(test)]
mod tests;
