//! Core types and persistent collections for Pluralchain.
//!
//! This crate provides:
//! - [`Count`] - The number a chain resolves against
//! - [`Countable`] - Anything that can stand in for a count
//! - [`Multiplicity`] - The two-valued grammatical state
//! - [`Error`] - Distinguishable resolution failures
//! - Persistent collections ([`PcVec`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod count;
pub mod error;
pub mod multiplicity;

pub use collections::PcVec;
pub use count::{Count, Countable};
pub use error::Error;
pub use multiplicity::Multiplicity;

/// The result type for pluralizer operations.
pub type Result<T> = std::result::Result<T, Error>;
