//! Core Kernel - Foundational types for the agricultural underwriting engine
//!
//! This crate provides the fundamental building blocks used across the
//! domain and interface crates:
//! - Money types with precise decimal arithmetic
//! - Cover-period types for quote validity windows
//! - Strongly-typed identifiers

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{CatalogVersion, QuoteId, RuleId};
pub use money::{Currency, Money, MoneyError, Rate};
pub use temporal::{CoverPeriod, TemporalError};
