//! Mapper orchestration.

use std::any::Any;

use tracing::debug;

use crate::config::{InsertionMode, MappingConfig};
use crate::descriptor::{FieldDescriptor, FieldValue, Record, TypeDescriptor};
use crate::errors::{FieldAccessError, FieldNotFoundError, MapError, MapResult, MappingError};
use crate::strategy::{FieldExclusionStrategy, FieldValueInsertionStrategy, ObjectFactory};

use super::builder::MapperBuilder;

/// Copies same-named field values from a source record into a freshly
/// created instance of a target record type.
///
/// A `Mapper` binds one strategy set for its lifetime and holds no
/// per-call state, so a single instance can be shared across threads.
/// Each call either returns a fully populated target or a classified
/// error; a partially built target is never observable.
pub struct Mapper {
    pub(super) factory: Box<dyn ObjectFactory>,
    pub(super) insertion: Box<dyn FieldValueInsertionStrategy>,
    pub(super) exclusion: Box<dyn FieldExclusionStrategy>,
}

impl Mapper {
    /// A mapper with the default strategy set (constructor factory,
    /// mutator insertion, reserved-name + marker exclusion).
    pub fn new() -> Self {
        MapperBuilder::new().build()
    }

    /// Start overriding individual strategies.
    pub fn builder() -> MapperBuilder {
        MapperBuilder::new()
    }

    /// Wire a mapper from a plain configuration struct.
    pub fn from_config(config: &MappingConfig) -> Self {
        let mut builder = MapperBuilder::new().with_exclusion_strategy(config.exclusion());
        builder = match config.insertion {
            InsertionMode::Mutator => {
                builder.with_insertion_strategy(crate::strategy::MutatorInsertion)
            }
            InsertionMode::Direct => {
                builder.with_insertion_strategy(crate::strategy::DirectFieldInsertion)
            }
        };
        builder.build()
    }

    /// Map `source` into a new `T`.
    pub fn map_object<S: Record, T: Record>(&self, source: &S) -> MapResult<T> {
        let target = self.map_dynamic(source, S::descriptor(), T::descriptor())?;
        target.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
            MapError::InvalidArgument(format!(
                "descriptor `{}` does not describe the requested target type",
                T::descriptor().type_name()
            ))
        })
    }

    /// Dynamic entry point: map an erased source instance described by
    /// `source_type` into a new instance of `target_type`.
    ///
    /// Precondition failures — a source whose runtime type is not the one
    /// `source_type` describes — surface as [`MapError::InvalidArgument`]
    /// before any strategy is consulted.
    pub fn map_dynamic(
        &self,
        source: &dyn Any,
        source_type: &TypeDescriptor,
        target_type: &TypeDescriptor,
    ) -> MapResult<Box<dyn Any>> {
        if !source_type.describes(source) {
            return Err(MapError::InvalidArgument(format!(
                "source instance is not a `{}`",
                source_type.type_name()
            )));
        }

        let declared: Vec<&FieldDescriptor> = source_type.declared_fields().iter().collect();
        let surviving = self.exclusion.filter(declared)?;
        debug!(
            source = %source_type.type_name(),
            target = %target_type.type_name(),
            fields = surviving.len(),
            "mapping record"
        );

        let mut target = self.factory.create(target_type)?;
        for field in surviving {
            let value = self.read_source_value(source, source_type, field)?;
            let target_field = target_type.field(field.name()).ok_or_else(|| {
                MappingError::from(FieldNotFoundError {
                    field: field.name(),
                    type_name: target_type.type_name(),
                })
            })?;
            self.insertion
                .insert_value(value, target.as_mut(), target_type, target_field)?;
        }
        Ok(target)
    }

    fn read_source_value(
        &self,
        source: &dyn Any,
        source_type: &TypeDescriptor,
        field: &FieldDescriptor,
    ) -> MapResult<FieldValue> {
        source_type.read(source, field.name()).ok_or_else(|| {
            MapError::from(FieldAccessError::ReadDenied {
                field: field.name(),
                type_name: source_type.type_name(),
            })
        })
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper").finish_non_exhaustive()
    }
}
