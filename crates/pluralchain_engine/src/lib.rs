//! Component chains and the pluralizer resolution engine for Pluralchain.
//!
//! This crate provides:
//! - [`Component`] - Fragment-producing chain units
//! - [`ChainConfig`] - Immutable component chain plus formatting configuration
//! - [`Pluralizer`] - The chain-builder with the dual-mode call surface
//! - [`BoundPluralizer`] - The deferred form's second stage

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chain;
pub mod component;
pub mod pluralizer;

pub use chain::ChainConfig;
pub use component::Component;
pub use pluralizer::{BoundPluralizer, Pluralizer, plural};
