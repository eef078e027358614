//! Fragment-producing units of a pluralizer chain.
//!
//! Each [`Component`] contributes zero or one text fragment to the final
//! joined string, keyed off the effective count and a common word prefix.
//! Some variants additionally announce a multiplicity override, consumed by
//! the component immediately before them in the chain.

use std::sync::Arc;

use pluralchain_foundation::{Count, Multiplicity};

use crate::chain::ChainConfig;

/// A single unit in a pluralizer chain.
///
/// Components are immutable once constructed and resolve without side
/// effects: the same component resolved twice with the same arguments
/// yields the same fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Component {
    /// Fixed text chosen by multiplicity. An absent side contributes no
    /// fragment for that multiplicity, which lets an article supply "a"
    /// for singular and nothing for plural.
    Literal {
        /// Text emitted when the effective count is exactly 1.
        singular: Option<Arc<str>>,
        /// Text emitted for every other effective count.
        plural: Option<Arc<str>>,
    },
    /// The count rendered as its decimal string representation.
    Count,
    /// Announces that the previous component should treat the count as
    /// singular or plural regardless of the actual count. Emits nothing
    /// itself.
    ForceMultiplicity(Multiplicity),
    /// The common prefix plus the configured singular or plural suffix.
    Suffixed,
}

impl Component {
    /// Creates a literal component emitting the same text for both
    /// multiplicities.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self::Literal {
            singular: Some(Arc::from(text)),
            plural: Some(Arc::from(text)),
        }
    }

    /// Creates a literal component with separate singular and plural text.
    /// Either side may be absent.
    #[must_use]
    pub fn literal_pair(singular: Option<&str>, plural: Option<&str>) -> Self {
        Self::Literal {
            singular: singular.map(Arc::from),
            plural: plural.map(Arc::from),
        }
    }

    /// Resolves this component to an optional text fragment.
    ///
    /// `override_from_next` is whatever the next component in the chain
    /// announces via [`Component::announced_override`]. The literal and
    /// suffix variants reason about the forced count instead of the actual
    /// one when an override is present; the count variant always renders
    /// the actual count.
    #[must_use]
    pub fn resolve(
        &self,
        count: Count,
        common_prefix: &str,
        config: &ChainConfig,
        override_from_next: Option<Multiplicity>,
    ) -> Option<String> {
        match self {
            Self::Literal { singular, plural } => {
                let text = if effective_count(count, override_from_next).is_singular() {
                    singular
                } else {
                    plural
                };
                text.as_deref().map(str::to_owned)
            }
            Self::Count => Some(count.to_string()),
            Self::ForceMultiplicity(_) => None,
            Self::Suffixed => {
                let suffix = if effective_count(count, override_from_next).is_singular() {
                    config.singular_suffix()
                } else {
                    config.plural_suffix()
                };
                Some(format!("{common_prefix}{suffix}"))
            }
        }
    }

    /// The multiplicity override this component announces to its
    /// predecessor, if it has that capability.
    #[must_use]
    pub const fn announced_override(&self) -> Option<Multiplicity> {
        match self {
            Self::ForceMultiplicity(multiplicity) => Some(*multiplicity),
            _ => None,
        }
    }
}

/// The count a component reasons about: the forced count when the next
/// component announced an override, the actual count otherwise.
fn effective_count(count: Count, override_from_next: Option<Multiplicity>) -> Count {
    match override_from_next {
        Some(multiplicity) => multiplicity.forced_count(),
        None => count,
    }
}
