//! The registered descriptor table for one type.

use std::any::{Any, TypeId};
use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::BoxError;

use super::field::FieldDescriptor;
use super::value::FieldValue;

pub(crate) type ConstructorFn = dyn Fn() -> Result<Box<dyn Any>, BoxError> + Send + Sync;
pub(crate) type ReadFn = dyn Fn(&dyn Any) -> Option<FieldValue> + Send + Sync;
pub(crate) type WriteFn = dyn Fn(&mut dyn Any, FieldValue) -> Result<(), WriteRejection> + Send + Sync;
pub(crate) type MutatorFn =
    dyn Fn(&mut dyn Any, FieldValue) -> Result<(), MutatorRejection> + Send + Sync;

/// Why a direct field write was refused by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteRejection {
    /// No write accessor was registered for the field.
    NoAccessor,
    /// The target instance is not of the descriptor's type.
    TargetTypeMismatch,
    /// The value's runtime type does not fit the field.
    ValueTypeMismatch,
}

/// Why a mutator invocation failed.
#[derive(Debug)]
pub enum MutatorRejection {
    /// The target instance is not of the descriptor's type.
    TargetTypeMismatch,
    /// The value's runtime type does not fit the mutator's parameter.
    ValueTypeMismatch,
    /// The mutator body itself raised an error.
    Failed(BoxError),
}

/// Conventional mutator name for a field: `count` becomes `set_count`.
pub fn derived_mutator_name(field: &str) -> String {
    format!("set_{field}")
}

/// A registered single-argument mutator.
pub struct MutatorDescriptor {
    pub(crate) name: String,
    pub(crate) param_type: TypeId,
    pub(crate) param_type_name: &'static str,
    pub(crate) invoke: Box<MutatorFn>,
}

impl MutatorDescriptor {
    /// Mutator name as registered (usually `set_<field>`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `TypeId` of the single parameter.
    pub fn param_type(&self) -> TypeId {
        self.param_type
    }

    /// Name of the parameter type.
    pub fn param_type_name(&self) -> &'static str {
        self.param_type_name
    }

    /// Whether this mutator accepts the value's runtime type.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        self.param_type == value.type_id()
    }

    /// Invoke the mutator against a target instance.
    pub fn invoke(&self, target: &mut dyn Any, value: FieldValue) -> Result<(), MutatorRejection> {
        (self.invoke)(target, value)
    }
}

impl fmt::Debug for MutatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutatorDescriptor")
            .field("name", &self.name)
            .field("param_type_name", &self.param_type_name)
            .finish_non_exhaustive()
    }
}

/// The declared-field table of one concrete type: fields in declaration
/// order, accessor closures keyed by field name, mutators keyed by
/// mutator name, and the optional argument-less constructor.
///
/// Built once per type through [`super::TypeDescriptorBuilder`], then
/// shared freely: every closure is `Send + Sync` and the table is never
/// mutated after construction.
pub struct TypeDescriptor {
    pub(crate) type_name: &'static str,
    pub(crate) type_id: TypeId,
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) field_index: FxHashMap<&'static str, usize>,
    pub(crate) readers: FxHashMap<&'static str, Box<ReadFn>>,
    pub(crate) writers: FxHashMap<&'static str, Box<WriteFn>>,
    pub(crate) mutators: FxHashMap<String, MutatorDescriptor>,
    pub(crate) constructor: Option<Box<ConstructorFn>>,
}

impl TypeDescriptor {
    /// Name of the described type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `TypeId` of the described type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Whether `instance`'s runtime type is the described type.
    pub fn describes(&self, instance: &dyn Any) -> bool {
        instance.type_id() == self.type_id
    }

    /// The type's own declared fields, in declaration order.
    pub fn declared_fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Resolve a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.field_index.get(name).map(|&i| &self.fields[i])
    }

    /// Whether a read accessor is registered for the field.
    pub fn can_read(&self, field: &str) -> bool {
        self.readers.contains_key(field)
    }

    /// Whether a write accessor is registered for the field.
    pub fn can_write(&self, field: &str) -> bool {
        self.writers.contains_key(field)
    }

    /// Read a field's current value out of an instance. `None` when no
    /// read accessor is registered or the instance is of a different type.
    pub fn read(&self, instance: &dyn Any, field: &str) -> Option<FieldValue> {
        self.readers.get(field).and_then(|read| read(instance))
    }

    /// Write a value straight into a field of an instance.
    pub fn write(
        &self,
        instance: &mut dyn Any,
        field: &str,
        value: FieldValue,
    ) -> Result<(), WriteRejection> {
        match self.writers.get(field) {
            Some(write) => write(instance, value),
            None => Err(WriteRejection::NoAccessor),
        }
    }

    /// Look up a registered mutator by its full name.
    pub fn mutator(&self, name: &str) -> Option<&MutatorDescriptor> {
        self.mutators.get(name)
    }

    /// Whether an argument-less constructor is registered.
    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Run the registered constructor. `None` when the type registered
    /// none; `Some(Err)` when the constructor body failed.
    pub fn construct(&self) -> Option<Result<Box<dyn Any>, BoxError>> {
        self.constructor.as_ref().map(|ctor| ctor())
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("mutators", &self.mutators.len())
            .field("has_constructor", &self.constructor.is_some())
            .finish()
    }
}
