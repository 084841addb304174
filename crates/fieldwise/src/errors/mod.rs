//! Error handling for fieldwise.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod access_error;
pub mod error_code;
pub mod instantiation_error;
pub mod map_error;
pub mod not_found_error;

pub use access_error::FieldAccessError;
pub use error_code::FieldwiseErrorCode;
pub use instantiation_error::InstantiationError;
pub use map_error::{MapError, MapResult, MappingError};
pub use not_found_error::{FieldNotFoundError, SetterNotFoundError};

/// Boxed error used wherever a strategy or registered closure surfaces an
/// arbitrary underlying cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
