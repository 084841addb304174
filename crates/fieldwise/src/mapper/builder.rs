//! Mapper construction with per-strategy defaults.

use crate::strategy::{
    CompositeExclusion, ConstructorFactory, FieldExclusionStrategy, FieldValueInsertionStrategy,
    MutatorInsertion, ObjectFactory,
};

use super::facade::Mapper;

/// Builds a [`Mapper`], defaulting every strategy the caller does not
/// override: [`ConstructorFactory`], [`MutatorInsertion`], and the
/// default [`CompositeExclusion`] chain.
pub struct MapperBuilder {
    factory: Option<Box<dyn ObjectFactory>>,
    insertion: Option<Box<dyn FieldValueInsertionStrategy>>,
    exclusion: Option<Box<dyn FieldExclusionStrategy>>,
}

impl MapperBuilder {
    pub fn new() -> Self {
        Self {
            factory: None,
            insertion: None,
            exclusion: None,
        }
    }

    /// Override how target instances are produced.
    pub fn with_object_factory(mut self, factory: impl ObjectFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Override how values are written into the target.
    pub fn with_insertion_strategy(
        mut self,
        insertion: impl FieldValueInsertionStrategy + 'static,
    ) -> Self {
        self.insertion = Some(Box::new(insertion));
        self
    }

    /// Override which source fields are eligible.
    pub fn with_exclusion_strategy(
        mut self,
        exclusion: impl FieldExclusionStrategy + 'static,
    ) -> Self {
        self.exclusion = Some(Box::new(exclusion));
        self
    }

    /// Finish, filling in defaults for anything unset.
    pub fn build(self) -> Mapper {
        Mapper {
            factory: self
                .factory
                .unwrap_or_else(|| Box::new(ConstructorFactory)),
            insertion: self
                .insertion
                .unwrap_or_else(|| Box::new(MutatorInsertion)),
            exclusion: self
                .exclusion
                .unwrap_or_else(|| Box::new(CompositeExclusion::default())),
        }
    }
}

impl Default for MapperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
