//! Field-level metadata.

use std::any::TypeId;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Well-known field markers.
///
/// Markers are free-form strings so downstream policies can invent their
/// own; only `exclude` has built-in semantics (consulted on the source
/// side by the marker exclusion policy and on the target side by the
/// mutator insertion variant).
pub mod markers {
    /// Excludes a field from mapping entirely.
    pub const EXCLUDE: &str = "exclude";
}

/// Names starting with this prefix are implementation-reserved and never
/// mapped by the default exclusion policy.
pub const RESERVED_PREFIX: &str = "__";

/// Declared visibility of a field.
///
/// Purely descriptive: accessor closures already see the field, so this
/// only feeds the visibility exclusion policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Crate,
    Private,
}

/// Semantic view of one declared field: name, declared type, visibility,
/// and attached markers. Owned by the type's descriptor; read-only for
/// every downstream consumer.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    visibility: Visibility,
    synthetic: bool,
    markers: SmallVec<[&'static str; 2]>,
    index: usize,
}

impl FieldDescriptor {
    pub(crate) fn new(
        name: &'static str,
        type_name: &'static str,
        type_id: TypeId,
        visibility: Visibility,
        synthetic: bool,
        markers: SmallVec<[&'static str; 2]>,
        index: usize,
    ) -> Self {
        Self {
            name,
            type_name,
            type_id,
            visibility,
            synthetic,
            markers,
            index,
        }
    }

    /// Field name, unique within its declaring type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the field's declared Rust type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `TypeId` of the field's declared type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Declared visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the field is compiler- or tool-generated rather than
    /// hand-declared.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// Declaration index; determines insertion-call ordering only.
    pub fn index(&self) -> usize {
        self.index
    }

    /// All markers attached to this field.
    pub fn markers(&self) -> &[&'static str] {
        &self.markers
    }

    /// Whether a specific marker is attached.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| *m == marker)
    }

    /// Whether the name falls under the implementation-reserved prefix.
    pub fn has_reserved_name(&self) -> bool {
        self.name.starts_with(RESERVED_PREFIX)
    }
}
