//! The pluralizer: an immutable chain-builder with a dual-mode call
//! surface terse enough for interpolation sites.
//!
//! Chains grow through named extension methods, each returning a fresh
//! [`Pluralizer`]; the parent stays valid and may branch into many
//! different chains. Invocation comes in two shapes: the deferred form
//! closes over a count and waits for the literal reference word, the
//! immediate form takes a single-entry named-countable mapping and returns
//! the finished string directly.

use pluralchain_foundation::{Count, Countable, Error, Multiplicity, Result};

use crate::chain::ChainConfig;
use crate::component::Component;

/// Returns the root pluralizer with empty configuration.
///
/// ```
/// use pluralchain_engine::plural;
///
/// let n = 4;
/// let line = format!("Anne has {}.", plural().a().s().with_count(&n).word("pencils")?);
/// assert_eq!(line, "Anne has pencils.");
/// # Ok::<(), pluralchain_foundation::Error>(())
/// ```
#[must_use]
pub fn plural() -> Pluralizer {
    Pluralizer::new()
}

/// An immutable chain of components plus formatting configuration.
///
/// Every extension method returns a new pluralizer backed by a copied
/// component list; the parent is never mutated and may be reused as the
/// root of many chains. Resolving a chain twice with the same arguments
/// yields identical output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pluralizer {
    config: ChainConfig,
}

impl Pluralizer {
    /// Creates the root pluralizer with empty configuration.
    ///
    /// The root resolves through the default suffix component: with no
    /// configured suffixes it echoes the reference word for any count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration this pluralizer resolves with.
    #[must_use]
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    fn extend(&self, component: Component) -> Self {
        Self {
            config: self.config.with_component(component),
        }
    }

    fn extend_suffixed(&self, singular: Option<&str>, plural: Option<&str>) -> Self {
        let mut config = self.config.with_component(Component::Suffixed);
        if let Some(suffix) = singular {
            config = config.with_singular_suffix(suffix);
        }
        if let Some(suffix) = plural {
            config = config.with_plural_suffix(suffix);
        }
        Self { config }
    }

    // =========================================================================
    // Chain Extensions
    // =========================================================================

    /// Appends the count itself, rendered as a decimal string.
    #[must_use]
    pub fn num(&self) -> Self {
        self.extend(Component::Count)
    }

    /// Forces the previous component to resolve as singular, regardless of
    /// the actual count.
    #[must_use]
    pub fn singular(&self) -> Self {
        self.extend(Component::ForceMultiplicity(Multiplicity::Singular))
    }

    /// Forces the previous component to resolve as plural, regardless of
    /// the actual count.
    #[must_use]
    pub fn plural(&self) -> Self {
        self.extend(Component::ForceMultiplicity(Multiplicity::Plural))
    }

    /// Word stem with an "s" plural suffix: `card` / `cards`.
    #[must_use]
    pub fn s(&self) -> Self {
        self.extend_suffixed(None, Some("s"))
    }

    /// Word stem with an "es" plural suffix: `potato` / `potatoes`.
    #[must_use]
    pub fn es(&self) -> Self {
        self.extend_suffixed(None, Some("es"))
    }

    /// Word stem with "y" / "ies" suffixes: `cherry` / `cherries`.
    #[must_use]
    pub fn y_ies(&self) -> Self {
        self.extend_suffixed(Some("y"), Some("ies"))
    }

    /// Word stem with "is" / "es" suffixes: `thesis` / `theses`.
    #[must_use]
    pub fn is_es(&self) -> Self {
        self.extend_suffixed(Some("is"), Some("es"))
    }

    /// Word stem with identical singular and plural forms: `fish`.
    #[must_use]
    pub fn same(&self) -> Self {
        self.extend_suffixed(None, None)
    }

    /// The article "a" for singular, nothing for plural.
    #[must_use]
    pub fn a(&self) -> Self {
        self.extend(Component::literal_pair(Some("a"), None))
    }

    /// The article "an" for singular, nothing for plural.
    #[must_use]
    pub fn an(&self) -> Self {
        self.extend(Component::literal_pair(Some("an"), None))
    }

    /// The copula "is" / "are".
    #[must_use]
    pub fn is_are(&self) -> Self {
        self.extend(Component::literal_pair(Some("is"), Some("are")))
    }

    /// "is a" for singular, "are" for plural.
    #[must_use]
    pub fn is_a__are(&self) -> Self {
        self.extend(Component::literal_pair(Some("is a"), Some("are")))
    }

    /// "has" / "have".
    #[must_use]
    pub fn has_have(&self) -> Self {
        self.extend(Component::literal_pair(Some("has"), Some("have")))
    }

    /// "was" / "were".
    #[must_use]
    pub fn was_were(&self) -> Self {
        self.extend(Component::literal_pair(Some("was"), Some("were")))
    }

    /// Appends fixed text emitted for both multiplicities.
    #[must_use]
    pub fn literal(&self, text: &str) -> Self {
        self.extend(Component::literal(text))
    }

    /// Appends fixed text with separate singular and plural sides; either
    /// side may be absent.
    #[must_use]
    pub fn literal_pair(&self, singular: Option<&str>, plural: Option<&str>) -> Self {
        self.extend(Component::literal_pair(singular, plural))
    }

    // =========================================================================
    // Invocation
    // =========================================================================

    /// Closes the chain over a count (the deferred form).
    ///
    /// The returned [`BoundPluralizer`] waits for the literal reference
    /// word written at the interpolation site.
    #[must_use]
    pub fn with_count<C: Countable + ?Sized>(&self, countable: &C) -> BoundPluralizer {
        BoundPluralizer {
            config: self.config.clone(),
            count: countable.count(),
        }
    }

    /// Resolves a single-entry named-countable mapping (the immediate
    /// form).
    ///
    /// The count is derived from the entry's value, the common prefix from
    /// the entry's key by stripping the configured plural suffix.
    ///
    /// ```
    /// use pluralchain_engine::plural;
    ///
    /// let nephews = vec!["Tick", "Trick", "Track"];
    /// let text = plural().is_a__are().s().resolve([("nephews", &nephews)])?;
    /// assert_eq!(text, "are nephews");
    /// # Ok::<(), pluralchain_foundation::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousKey`] unless the mapping contains exactly
    /// one entry, and [`Error::SuffixMismatch`] if the key does not end
    /// with the configured plural suffix.
    pub fn resolve<K, C>(&self, named: impl IntoIterator<Item = (K, C)>) -> Result<String>
    where
        K: AsRef<str>,
        C: Countable,
    {
        let mut entries = named.into_iter();
        let Some((key, countable)) = entries.next() else {
            return Err(Error::ambiguous_key(0));
        };
        let extra = entries.count();
        if extra > 0 {
            return Err(Error::ambiguous_key(1 + extra));
        }

        let common_prefix = self.config.extract_common_prefix(key.as_ref())?;
        Ok(self.config.resolve(countable.count(), &common_prefix))
    }
}

/// A chain closed over a count: the second stage of the deferred form,
/// waiting for the literal reference word.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundPluralizer {
    config: ChainConfig,
    count: Count,
}

impl BoundPluralizer {
    /// The count this chain is closed over.
    #[must_use]
    pub fn count(&self) -> Count {
        self.count
    }

    /// Finishes resolution with the literal plural word written at the
    /// interpolation site.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SuffixMismatch`] if the word does not end with the
    /// configured plural suffix.
    pub fn word(&self, reference: &str) -> Result<String> {
        let common_prefix = self.config.extract_common_prefix(reference)?;
        Ok(self.config.resolve(self.count, &common_prefix))
    }
}
