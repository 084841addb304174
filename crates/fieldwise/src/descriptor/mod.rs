//! Per-type descriptor tables — the crate's stand-in for runtime
//! reflection.
//!
//! Each participating type registers a [`TypeDescriptor`] once (usually in
//! a lazy static) describing its declared fields in declaration order, its
//! argument-less constructor, and the accessor closures that read and
//! write those fields. The closures are defined where the fields are
//! visible, which is what "bypassing visibility" means here: the declared
//! [`Visibility`] on a field is metadata for exclusion policies, never an
//! enforcement mechanism.

mod builder;
mod field;
mod record;
mod type_descriptor;
mod value;

pub use builder::{FieldBinding, TypeDescriptorBuilder};
pub use field::{markers, FieldDescriptor, Visibility, RESERVED_PREFIX};
pub use record::Record;
pub use type_descriptor::{
    derived_mutator_name, MutatorDescriptor, MutatorRejection, TypeDescriptor, WriteRejection,
};
pub use value::FieldValue;
