//! Lookup failures on the target type: missing fields and missing mutators.

use super::error_code::{self, FieldwiseErrorCode};

/// No field with the requested name is declared on the target type.
#[derive(Debug, thiserror::Error)]
#[error("no field `{field}` declared on target type `{type_name}`")]
pub struct FieldNotFoundError {
    pub field: &'static str,
    pub type_name: &'static str,
}

impl FieldwiseErrorCode for FieldNotFoundError {
    fn error_code(&self) -> &'static str {
        error_code::FIELD_NOT_FOUND
    }
}

/// No single-argument mutator with the derived name accepts the value's
/// runtime type. Raised only by the mutator insertion variant.
#[derive(Debug, thiserror::Error)]
#[error("no mutator `{mutator}` accepting `{value_type}` found on target type `{type_name}`")]
pub struct SetterNotFoundError {
    pub mutator: String,
    pub value_type: &'static str,
    pub type_name: &'static str,
}

impl FieldwiseErrorCode for SetterNotFoundError {
    fn error_code(&self) -> &'static str {
        error_code::SETTER_NOT_FOUND
    }
}
