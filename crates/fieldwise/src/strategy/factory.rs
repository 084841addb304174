//! Target instantiation.

use std::any::Any;

use tracing::debug;

use crate::descriptor::TypeDescriptor;
use crate::errors::{InstantiationError, MappingError};

/// Produces the new, empty target instance for one mapping call.
pub trait ObjectFactory: Send + Sync {
    /// Create an instance of the described type.
    fn create(&self, target_type: &TypeDescriptor) -> Result<Box<dyn Any>, MappingError>;
}

/// Default factory: runs the descriptor's registered argument-less
/// constructor. Because registration happens where the constructor is
/// visible, a target type does not need a public constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructorFactory;

impl ObjectFactory for ConstructorFactory {
    fn create(&self, target_type: &TypeDescriptor) -> Result<Box<dyn Any>, MappingError> {
        let type_name = target_type.type_name();
        let instance = target_type
            .construct()
            .ok_or(InstantiationError::MissingConstructor { type_name })?
            .map_err(|cause| InstantiationError::ConstructorFailed { type_name, cause })?;

        // The table promised an instance of the described type; a mismatch
        // means the registration lied and nothing downstream can be trusted.
        if instance.as_ref().type_id() != target_type.type_id() {
            return Err(InstantiationError::TypeMismatch { type_name }.into());
        }
        debug!(target = %type_name, "created target instance");
        Ok(instance)
    }
}
