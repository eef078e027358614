//! Pluralchain - Grammatical-number text composition
//!
//! This crate re-exports all layers of the Pluralchain system for
//! convenient access. For detailed documentation, see the individual
//! layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: pluralchain_demo       — Demonstration binary
//! Layer 1: pluralchain_engine     — Components, chains, pluralizer
//! Layer 0: pluralchain_foundation — Core types (Count, Multiplicity, Error)
//! ```

pub use pluralchain_engine as engine;
pub use pluralchain_foundation as foundation;
