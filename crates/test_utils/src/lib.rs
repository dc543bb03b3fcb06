//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! underwriting engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
