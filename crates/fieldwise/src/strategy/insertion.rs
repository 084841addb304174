//! Value insertion: how a source value lands in a target field.

use std::any::Any;

use tracing::trace;

use crate::descriptor::{
    derived_mutator_name, markers, FieldDescriptor, FieldValue, MutatorRejection, TypeDescriptor,
    WriteRejection,
};
use crate::errors::{FieldAccessError, FieldNotFoundError, MappingError, SetterNotFoundError};

/// Writes one source value into one resolved target field. Exactly one
/// variant is active per mapper; both take the same inputs.
pub trait FieldValueInsertionStrategy: Send + Sync {
    /// Insert `value` into `target_field` of `target`.
    fn insert_value(
        &self,
        value: FieldValue,
        target: &mut dyn Any,
        target_type: &TypeDescriptor,
        target_field: &FieldDescriptor,
    ) -> Result<(), MappingError>;
}

/// Writes straight through the target's registered write accessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectFieldInsertion;

impl FieldValueInsertionStrategy for DirectFieldInsertion {
    fn insert_value(
        &self,
        value: FieldValue,
        target: &mut dyn Any,
        target_type: &TypeDescriptor,
        target_field: &FieldDescriptor,
    ) -> Result<(), MappingError> {
        let field = target_field.name();
        let type_name = target_type.type_name();
        if target_type.field(field).is_none() {
            return Err(FieldNotFoundError { field, type_name }.into());
        }

        let value_type = value.type_name();
        trace!(field = %field, target = %type_name, "direct field write");
        target_type
            .write(target, field, value)
            .map_err(|rejection| match rejection {
                WriteRejection::NoAccessor | WriteRejection::TargetTypeMismatch => {
                    FieldAccessError::WriteDenied { field, type_name }
                }
                WriteRejection::ValueTypeMismatch => FieldAccessError::ValueTypeRejected {
                    field,
                    type_name,
                    value_type,
                },
            })?;
        Ok(())
    }
}

/// Locates and invokes the conventionally named single-argument mutator
/// (`count` resolves to `set_count`).
///
/// Exclusion is enforced from the write side here as well: a target field
/// carrying the `exclude` marker refuses the insertion outright, even
/// when the source-side field was unmarked.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutatorInsertion;

impl FieldValueInsertionStrategy for MutatorInsertion {
    fn insert_value(
        &self,
        value: FieldValue,
        target: &mut dyn Any,
        target_type: &TypeDescriptor,
        target_field: &FieldDescriptor,
    ) -> Result<(), MappingError> {
        let field = target_field.name();
        let type_name = target_type.type_name();
        if target_field.has_marker(markers::EXCLUDE) {
            return Err(FieldAccessError::ExcludedTarget { field }.into());
        }

        let mutator_name = derived_mutator_name(field);
        let value_type = value.type_name();
        let mutator = target_type
            .mutator(&mutator_name)
            .filter(|m| m.accepts(&value))
            .ok_or_else(|| SetterNotFoundError {
                mutator: mutator_name.clone(),
                value_type,
                type_name,
            })?;

        trace!(mutator = %mutator_name, target = %type_name, "invoking mutator");
        mutator
            .invoke(target, value)
            .map_err(|rejection| match rejection {
                MutatorRejection::TargetTypeMismatch => {
                    MappingError::from(FieldAccessError::WriteDenied { field, type_name })
                }
                MutatorRejection::ValueTypeMismatch => {
                    MappingError::from(FieldAccessError::ValueTypeRejected {
                        field,
                        type_name,
                        value_type,
                    })
                }
                MutatorRejection::Failed(cause) => {
                    MappingError::from(FieldAccessError::MutatorFailed {
                        mutator: mutator_name.clone(),
                        type_name,
                        cause,
                    })
                }
            })?;
        Ok(())
    }
}
