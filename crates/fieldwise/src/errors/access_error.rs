//! Field access errors: reads, writes, and mutator invocations that the
//! descriptor table rejects.

use super::error_code::{self, FieldwiseErrorCode};
use super::BoxError;

/// A read or write was rejected even though the descriptor table is the
/// access-bypass mechanism — the table has no accessor for the field, the
/// value's runtime type does not fit, or the target side refuses the write.
#[derive(Debug, thiserror::Error)]
pub enum FieldAccessError {
    #[error("unable to read field `{field}` of `{type_name}`")]
    ReadDenied {
        field: &'static str,
        type_name: &'static str,
    },

    #[error("unable to write field `{field}` of `{type_name}`")]
    WriteDenied {
        field: &'static str,
        type_name: &'static str,
    },

    #[error("field `{field}` of `{type_name}` rejected a value of runtime type `{value_type}`")]
    ValueTypeRejected {
        field: &'static str,
        type_name: &'static str,
        value_type: &'static str,
    },

    #[error("field `{field}` is not accessible: marked excluded on the target type")]
    ExcludedTarget { field: &'static str },

    #[error("mutator `{mutator}` on `{type_name}` failed")]
    MutatorFailed {
        mutator: String,
        type_name: &'static str,
        #[source]
        cause: BoxError,
    },
}

impl FieldwiseErrorCode for FieldAccessError {
    fn error_code(&self) -> &'static str {
        error_code::FIELD_NOT_ACCESSIBLE
    }
}
