//! The two-valued grammatical state a component resolves against.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::count::Count;

/// Grammatical multiplicity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Multiplicity {
    /// Exactly one.
    Singular,
    /// Anything other than exactly one (zero included).
    Plural,
}

impl Multiplicity {
    /// The count a component reasons about when this multiplicity is
    /// announced as an override.
    #[must_use]
    pub const fn forced_count(self) -> Count {
        match self {
            Self::Singular => Count::ONE,
            Self::Plural => Count::new(2.0),
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singular => write!(f, "singular"),
            Self::Plural => write!(f, "plural"),
        }
    }
}
