//! Stable string codes for every error kind.
//!
//! Codes cross process boundaries (logs, bindings) where enum variants
//! cannot, so they must never be renamed once published.

pub const INVALID_ARGUMENT: &str = "E_INVALID_ARGUMENT";
pub const INSTANTIATION: &str = "E_INSTANTIATION";
pub const FIELD_NOT_FOUND: &str = "E_FIELD_NOT_FOUND";
pub const FIELD_NOT_ACCESSIBLE: &str = "E_FIELD_NOT_ACCESSIBLE";
pub const SETTER_NOT_FOUND: &str = "E_SETTER_NOT_FOUND";

/// Maps an error to its stable string code.
pub trait FieldwiseErrorCode {
    /// Stable machine-readable code for this error.
    fn error_code(&self) -> &'static str;
}
