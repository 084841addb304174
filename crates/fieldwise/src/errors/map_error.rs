//! Top-level mapping errors.
//! `MappingError` is the umbrella for every failure raised after the
//! precondition checks; `MapError` adds the argument-validation kind so
//! callers can match broadly or narrowly.

use super::error_code::{self, FieldwiseErrorCode};
use super::{FieldAccessError, FieldNotFoundError, InstantiationError, SetterNotFoundError};

/// Umbrella over every non-argument failure of a mapping call.
/// Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("instantiation failed: {0}")]
    Instantiation(#[from] InstantiationError),

    #[error("field not found: {0}")]
    FieldNotFound(#[from] FieldNotFoundError),

    #[error("field not accessible: {0}")]
    FieldNotAccessible(#[from] FieldAccessError),

    #[error("setter not found: {0}")]
    SetterNotFound(#[from] SetterNotFoundError),
}

impl FieldwiseErrorCode for MappingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Instantiation(e) => e.error_code(),
            Self::FieldNotFound(e) => e.error_code(),
            Self::FieldNotAccessible(e) => e.error_code(),
            Self::SetterNotFound(e) => e.error_code(),
        }
    }
}

/// Everything `map_object`/`map_dynamic` can signal: a precondition
/// violation detected before any strategy runs, or a classified mapping
/// failure partway through.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl FieldwiseErrorCode for MapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => error_code::INVALID_ARGUMENT,
            Self::Mapping(e) => e.error_code(),
        }
    }
}

impl From<InstantiationError> for MapError {
    fn from(e: InstantiationError) -> Self {
        MappingError::from(e).into()
    }
}

impl From<FieldNotFoundError> for MapError {
    fn from(e: FieldNotFoundError) -> Self {
        MappingError::from(e).into()
    }
}

impl From<FieldAccessError> for MapError {
    fn from(e: FieldAccessError) -> Self {
        MappingError::from(e).into()
    }
}

impl From<SetterNotFoundError> for MapError {
    fn from(e: SetterNotFoundError) -> Self {
        MappingError::from(e).into()
    }
}

/// Result alias used across the mapper facade.
pub type MapResult<T> = Result<T, MapError>;
