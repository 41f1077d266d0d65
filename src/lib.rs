//! Indexed validations: record attribute rules enforced through a search
//! index.
//!
//! Applications that persist records in one store and project them into a
//! searchable index can use this crate to enforce attribute constraints the
//! primary store cannot express, by asking the index instead.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values and rule configuration with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the search index
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`uniqueness`]: Single-valued, index-backed attribute uniqueness

pub mod uniqueness;
