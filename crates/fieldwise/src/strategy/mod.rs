//! The pluggable strategy set: field exclusion, target instantiation, and
//! value insertion.
//!
//! Each strategy is a stateless, `Send + Sync` behavior bound to a
//! [`crate::mapper::Mapper`] at construction time and never mutated after.

mod exclusion;
mod factory;
mod insertion;

pub use exclusion::{
    CompositeExclusion, ExclusionPolicy, FieldExclusionStrategy, MarkerExclusionPolicy,
    ReservedNamePolicy, VisibilityExclusionPolicy,
};
pub use factory::{ConstructorFactory, ObjectFactory};
pub use insertion::{DirectFieldInsertion, FieldValueInsertionStrategy, MutatorInsertion};
