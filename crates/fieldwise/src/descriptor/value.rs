//! Type-erased field value carrier.

use std::any::{Any, TypeId};
use std::fmt;

/// A value read from a source field, on its way into a target field.
///
/// Carries the originating field's name and type name so failures
/// downstream can name what was being moved.
pub struct FieldValue {
    value: Box<dyn Any>,
    field_name: &'static str,
    type_name: &'static str,
}

impl FieldValue {
    /// Wrap a concrete value read from `field_name`.
    pub fn new<V: 'static>(field_name: &'static str, value: V) -> Self {
        Self {
            value: Box::new(value),
            field_name,
            type_name: std::any::type_name::<V>(),
        }
    }

    /// Name of the source field this value was read from.
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Name of the value's runtime type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `TypeId` of the carried value.
    pub fn type_id(&self) -> TypeId {
        self.value.as_ref().type_id()
    }

    /// Whether the carried value is a `V`.
    pub fn is<V: 'static>(&self) -> bool {
        self.value.is::<V>()
    }

    /// Recover the concrete value, or hand the carrier back unchanged when
    /// the runtime type does not match.
    pub fn downcast<V: 'static>(self) -> Result<V, FieldValue> {
        let FieldValue {
            value,
            field_name,
            type_name,
        } = self;
        match value.downcast::<V>() {
            Ok(v) => Ok(*v),
            Err(value) => Err(FieldValue {
                value,
                field_name,
                type_name,
            }),
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("field_name", &self.field_name)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
