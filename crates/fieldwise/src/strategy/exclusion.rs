//! Field exclusion: which source fields are eligible for copying.

use smallvec::SmallVec;

use crate::descriptor::{markers, FieldDescriptor, Visibility};
use crate::errors::MapResult;

/// One exclusion predicate. Policies compose via logical AND (a field
/// survives only if no policy excludes it), short-circuiting left to
/// right in [`CompositeExclusion`].
pub trait ExclusionPolicy: Send + Sync {
    /// Whether the field must be dropped from the mapping.
    fn is_excluded(&self, field: &FieldDescriptor) -> bool;
}

/// Drops implementation-reserved and compiler-synthesized fields:
/// anything under the reserved `__` prefix or flagged synthetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservedNamePolicy;

impl ExclusionPolicy for ReservedNamePolicy {
    fn is_excluded(&self, field: &FieldDescriptor) -> bool {
        field.has_reserved_name() || field.is_synthetic()
    }
}

/// Drops fields carrying the explicit `exclude` marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerExclusionPolicy;

impl ExclusionPolicy for MarkerExclusionPolicy {
    fn is_excluded(&self, field: &FieldDescriptor) -> bool {
        field.has_marker(markers::EXCLUDE)
    }
}

/// Drops fields whose declared visibility is in the configured set.
/// Only composed in when the caller asks for it.
#[derive(Debug, Clone, Default)]
pub struct VisibilityExclusionPolicy {
    excluded: SmallVec<[Visibility; 3]>,
}

impl VisibilityExclusionPolicy {
    /// Exclude every field whose visibility is in `excluded`.
    pub fn new(excluded: impl IntoIterator<Item = Visibility>) -> Self {
        Self {
            excluded: excluded.into_iter().collect(),
        }
    }
}

impl ExclusionPolicy for VisibilityExclusionPolicy {
    fn is_excluded(&self, field: &FieldDescriptor) -> bool {
        self.excluded.contains(&field.visibility())
    }
}

/// Filters the enumerated field sequence down to the fields to copy,
/// preserving relative order.
pub trait FieldExclusionStrategy: Send + Sync {
    /// Return the surviving subsequence. Custom strategies may fail; the
    /// error propagates out of the mapping call unchanged.
    fn filter<'a>(&self, fields: Vec<&'a FieldDescriptor>) -> MapResult<Vec<&'a FieldDescriptor>>;
}

/// The default strategy: an AND-composed chain of [`ExclusionPolicy`]s.
/// Extensible — push further policies (type-based exclusion and the like)
/// onto the chain.
pub struct CompositeExclusion {
    policies: Vec<Box<dyn ExclusionPolicy>>,
}

impl CompositeExclusion {
    /// An empty chain that excludes nothing.
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    /// The default chain: reserved-name/synthetic filtering plus the
    /// explicit `exclude` marker.
    pub fn default_policies() -> Self {
        Self::new()
            .with_policy(ReservedNamePolicy)
            .with_policy(MarkerExclusionPolicy)
    }

    /// Append a policy to the chain.
    pub fn with_policy(mut self, policy: impl ExclusionPolicy + 'static) -> Self {
        self.policies.push(Box::new(policy));
        self
    }
}

impl Default for CompositeExclusion {
    fn default() -> Self {
        Self::default_policies()
    }
}

impl FieldExclusionStrategy for CompositeExclusion {
    fn filter<'a>(&self, fields: Vec<&'a FieldDescriptor>) -> MapResult<Vec<&'a FieldDescriptor>> {
        Ok(fields
            .into_iter()
            .filter(|field| !self.policies.iter().any(|p| p.is_excluded(field)))
            .collect())
    }
}
