//! Unit tests for the uniqueness module.
//!
//! Tests are organised by layer, covering configuration, outcome
//! accumulation, and the validation service against mocked and in-memory
//! indexes.
