//! Error types for pluralizer resolution.
//!
//! Uses `thiserror` for ergonomic error definition. The taxonomy is
//! deliberately small: everything outside prefix derivation (missing
//! optional suffixes, absent literal text, non-finite counts) is valid
//! input with a defined fallback, never an error.

use thiserror::Error;

/// A resolution failure, reported at the call site that detects it and
/// never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The reference word does not end with the configured plural suffix.
    ///
    /// Raised for the literal word of the deferred form and for the sole
    /// key of the immediate form alike.
    #[error("reference plural \"{word}\" does not end with plural suffix \"{suffix}\"")]
    SuffixMismatch {
        /// The reference word supplied by the caller.
        word: String,
        /// The plural suffix the chain is configured with.
        suffix: String,
    },

    /// The named-countable mapping does not contain exactly one entry,
    /// so there is no unambiguous source for the common prefix.
    #[error("expected exactly one named countable, got {found}")]
    AmbiguousKey {
        /// The number of entries actually supplied.
        found: usize,
    },
}

impl Error {
    /// Creates a suffix mismatch error.
    #[must_use]
    pub fn suffix_mismatch(word: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::SuffixMismatch {
            word: word.into(),
            suffix: suffix.into(),
        }
    }

    /// Creates an ambiguous key error.
    #[must_use]
    pub const fn ambiguous_key(found: usize) -> Self {
        Self::AmbiguousKey { found }
    }
}
