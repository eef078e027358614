//! Chain configuration and the resolution driver.
//!
//! A [`ChainConfig`] is the immutable record behind every pluralizer: an
//! optional suffix pair plus the ordered component chain. Derivation is
//! append-only; the driver walks the chain once, left to right, handing
//! each component the override announced by its successor.

use std::sync::Arc;

use pluralchain_foundation::{Count, Error, PcVec, Result};

use crate::component::Component;

/// Formatting configuration plus the ordered component chain for one
/// pluralizer.
///
/// Configurations are append-only derived: a child copies its parent,
/// appends components, and overlays suffix overrides. Parents are never
/// mutated, so any configuration may back many divergent chains at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainConfig {
    singular_suffix: Option<Arc<str>>,
    plural_suffix: Option<Arc<str>>,
    components: PcVec<Component>,
}

impl ChainConfig {
    /// Creates an empty configuration.
    ///
    /// An empty chain resolves through the default suffix component.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured singular suffix, defaulting to empty.
    #[must_use]
    pub fn singular_suffix(&self) -> &str {
        self.singular_suffix.as_deref().unwrap_or("")
    }

    /// The configured plural suffix, defaulting to empty.
    #[must_use]
    pub fn plural_suffix(&self) -> &str {
        self.plural_suffix.as_deref().unwrap_or("")
    }

    /// The ordered component chain.
    #[must_use]
    pub fn components(&self) -> &PcVec<Component> {
        &self.components
    }

    /// Returns a new configuration with the component appended.
    #[must_use]
    pub fn with_component(&self, component: Component) -> Self {
        Self {
            singular_suffix: self.singular_suffix.clone(),
            plural_suffix: self.plural_suffix.clone(),
            components: self.components.push_back(component),
        }
    }

    /// Returns a new configuration with the singular suffix overlaid.
    #[must_use]
    pub fn with_singular_suffix(&self, suffix: &str) -> Self {
        Self {
            singular_suffix: Some(Arc::from(suffix)),
            ..self.clone()
        }
    }

    /// Returns a new configuration with the plural suffix overlaid.
    #[must_use]
    pub fn with_plural_suffix(&self, suffix: &str) -> Self {
        Self {
            plural_suffix: Some(Arc::from(suffix)),
            ..self.clone()
        }
    }

    /// Resolves the chain against a count and a common prefix.
    ///
    /// Components run in chain order; component `i` receives the override
    /// announced by component `i + 1` (the last component has no successor
    /// and is never queried). Absent and empty fragments are skipped and
    /// the rest joined with a single ASCII space. Identical chain and
    /// count yield byte-identical output.
    #[must_use]
    pub fn resolve(&self, count: Count, common_prefix: &str) -> String {
        if self.components.is_empty() {
            return Component::Suffixed
                .resolve(count, common_prefix, self, None)
                .unwrap_or_default();
        }

        let mut fragments: Vec<String> = Vec::with_capacity(self.components.len());
        for (i, component) in self.components.iter().enumerate() {
            let override_from_next = self
                .components
                .get(i + 1)
                .and_then(Component::announced_override);
            if let Some(fragment) = component.resolve(count, common_prefix, self, override_from_next)
            {
                if !fragment.is_empty() {
                    fragments.push(fragment);
                }
            }
        }
        fragments.join(" ")
    }

    /// Derives the common prefix by stripping the configured plural suffix
    /// from the end of a reference word.
    ///
    /// A zero-length suffix strips nothing and never fails. Matching is
    /// exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SuffixMismatch`] if the word does not end with the
    /// configured plural suffix.
    pub fn extract_common_prefix(&self, word: &str) -> Result<String> {
        let suffix = self.plural_suffix();
        match word.strip_suffix(suffix) {
            Some(prefix) => Ok(prefix.to_owned()),
            None => Err(Error::suffix_mismatch(word, suffix)),
        }
    }
}
