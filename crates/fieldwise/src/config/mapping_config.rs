//! Declarative mapper configuration.

use serde::{Deserialize, Serialize};

use crate::descriptor::Visibility;
use crate::strategy::{CompositeExclusion, VisibilityExclusionPolicy};

/// Which insertion variant the mapper uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionMode {
    /// Invoke the conventionally named `set_<field>` mutator.
    #[default]
    Mutator,
    /// Write through the field's direct write accessor.
    Direct,
}

/// Declarative mapper settings. Every field defaults, so a config
/// deserialized from a partial document behaves like the built-in
/// defaults with only the mentioned settings changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Active insertion variant.
    pub insertion: InsertionMode,
    /// Fields whose declared visibility is listed here are excluded from
    /// mapping. Empty means no visibility-based exclusion.
    pub excluded_visibilities: Vec<Visibility>,
}

impl MappingConfig {
    /// The exclusion chain this config describes: the default policies,
    /// plus a visibility policy when the excluded set is non-empty.
    pub(crate) fn exclusion(&self) -> CompositeExclusion {
        let chain = CompositeExclusion::default_policies();
        if self.excluded_visibilities.is_empty() {
            chain
        } else {
            chain.with_policy(VisibilityExclusionPolicy::new(
                self.excluded_visibilities.iter().copied(),
            ))
        }
    }
}
