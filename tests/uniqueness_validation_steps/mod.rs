//! Step definitions for uniqueness validation BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
