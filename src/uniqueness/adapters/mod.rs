//! Adapter implementations of the uniqueness ports.

pub mod memory;
