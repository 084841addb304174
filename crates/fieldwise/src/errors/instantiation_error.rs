//! Target instantiation errors.

use super::error_code::{self, FieldwiseErrorCode};
use super::BoxError;

/// Errors raised while producing a new target instance.
#[derive(Debug, thiserror::Error)]
pub enum InstantiationError {
    #[error("no argument-less constructor registered for `{type_name}`")]
    MissingConstructor { type_name: &'static str },

    #[error("constructor of `{type_name}` failed")]
    ConstructorFailed {
        type_name: &'static str,
        #[source]
        cause: BoxError,
    },

    #[error("constructor of `{type_name}` produced a value of a different runtime type")]
    TypeMismatch { type_name: &'static str },
}

impl FieldwiseErrorCode for InstantiationError {
    fn error_code(&self) -> &'static str {
        error_code::INSTANTIATION
    }
}
