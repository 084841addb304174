//! Typed construction of descriptor tables.

use std::any::{type_name, Any, TypeId};
use std::marker::PhantomData;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::errors::BoxError;

use super::field::{FieldDescriptor, Visibility};
use super::type_descriptor::{
    derived_mutator_name, ConstructorFn, MutatorDescriptor, MutatorFn, MutatorRejection, ReadFn,
    TypeDescriptor, WriteFn, WriteRejection,
};
use super::value::FieldValue;

/// Builds the [`TypeDescriptor`] for a concrete type `T`.
///
/// Fields are registered in declaration order through [`Self::field`],
/// which opens a [`FieldBinding`] sub-builder; `done()` on the binding
/// returns here. Misregistration (duplicate field or mutator names) is a
/// programming error and panics at build time rather than surfacing as a
/// mapping-time failure.
pub struct TypeDescriptorBuilder<T: 'static> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
    field_index: FxHashMap<&'static str, usize>,
    readers: FxHashMap<&'static str, Box<ReadFn>>,
    writers: FxHashMap<&'static str, Box<WriteFn>>,
    mutators: FxHashMap<String, MutatorDescriptor>,
    constructor: Option<Box<ConstructorFn>>,
    _type: PhantomData<fn() -> T>,
}

impl<T: 'static> TypeDescriptorBuilder<T> {
    /// Start a descriptor for `T` under the given display name.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
            field_index: FxHashMap::default(),
            readers: FxHashMap::default(),
            writers: FxHashMap::default(),
            mutators: FxHashMap::default(),
            constructor: None,
            _type: PhantomData,
        }
    }

    /// Register the argument-less constructor. Registration happens where
    /// the constructor is visible, so a non-public constructor works —
    /// that is the visibility bypass for instantiation.
    pub fn constructor(mut self, ctor: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.constructor = Some(Box::new(move || Ok(Box::new(ctor()) as Box<dyn Any>)));
        self
    }

    /// Register an argument-less constructor whose body may fail; the
    /// failure is preserved as the instantiation error's cause.
    pub fn fallible_constructor(
        mut self,
        ctor: impl Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    ) -> Self {
        self.constructor = Some(Box::new(move || {
            ctor().map(|v| Box::new(v) as Box<dyn Any>)
        }));
        self
    }

    /// Open a binding for a declared field of type `V`. Declaration order
    /// follows the order of `field` calls.
    pub fn field<V: 'static>(self, name: &'static str) -> FieldBinding<T, V> {
        FieldBinding {
            builder: self,
            name,
            visibility: Visibility::Public,
            synthetic: false,
            markers: SmallVec::new(),
            reader: None,
            writer: None,
            mutators: Vec::new(),
            _value: PhantomData,
        }
    }

    /// Finish the descriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            type_name: self.type_name,
            type_id: TypeId::of::<T>(),
            fields: self.fields,
            field_index: self.field_index,
            readers: self.readers,
            writers: self.writers,
            mutators: self.mutators,
            constructor: self.constructor,
        }
    }
}

/// Accumulates metadata and accessors for one field of `T` with declared
/// type `V`, then folds back into the type builder via [`Self::done`].
pub struct FieldBinding<T: 'static, V: 'static> {
    builder: TypeDescriptorBuilder<T>,
    name: &'static str,
    visibility: Visibility,
    synthetic: bool,
    markers: SmallVec<[&'static str; 2]>,
    reader: Option<Box<ReadFn>>,
    writer: Option<Box<WriteFn>>,
    mutators: Vec<MutatorDescriptor>,
    _value: PhantomData<fn() -> V>,
}

impl<T: 'static, V: 'static> FieldBinding<T, V> {
    /// Declared visibility (metadata for exclusion policies).
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark the field as compiler/tool-generated.
    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    /// Attach a marker.
    pub fn marker(mut self, marker: &'static str) -> Self {
        self.markers.push(marker);
        self
    }

    /// Attach the `exclude` marker.
    pub fn exclude(self) -> Self {
        self.marker(super::field::markers::EXCLUDE)
    }

    /// Register the read accessor. The closure sees the field directly,
    /// so private fields are readable as long as registration happens in
    /// the type's own module.
    pub fn get(mut self, read: impl Fn(&T) -> V + Send + Sync + 'static) -> Self {
        let name = self.name;
        self.reader = Some(Box::new(move |instance: &dyn Any| {
            instance
                .downcast_ref::<T>()
                .map(|t| FieldValue::new(name, read(t)))
        }));
        self
    }

    /// Register the direct write accessor.
    pub fn set(mut self, write: impl Fn(&mut T, V) + Send + Sync + 'static) -> Self {
        self.writer = Some(Box::new(
            move |instance: &mut dyn Any, value: FieldValue| {
                let target = instance
                    .downcast_mut::<T>()
                    .ok_or(WriteRejection::TargetTypeMismatch)?;
                let value = value
                    .downcast::<V>()
                    .map_err(|_| WriteRejection::ValueTypeMismatch)?;
                write(target, value);
                Ok(())
            },
        ));
        self
    }

    /// Register the conventionally named mutator (`set_<field>`).
    pub fn mutator(self, apply: impl Fn(&mut T, V) + Send + Sync + 'static) -> Self {
        let name = derived_mutator_name(self.name);
        self.mutator_named(name, apply)
    }

    /// Register a mutator under an explicit name, for types whose
    /// mutators do not follow the `set_<field>` convention.
    pub fn mutator_named(
        mut self,
        name: impl Into<String>,
        apply: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self {
        let invoke: Box<MutatorFn> =
            Box::new(move |instance: &mut dyn Any, value: FieldValue| {
                let target = instance
                    .downcast_mut::<T>()
                    .ok_or(MutatorRejection::TargetTypeMismatch)?;
                let value = value
                    .downcast::<V>()
                    .map_err(|_| MutatorRejection::ValueTypeMismatch)?;
                apply(target, value);
                Ok(())
            });
        self.mutators.push(MutatorDescriptor {
            name: name.into(),
            param_type: TypeId::of::<V>(),
            param_type_name: type_name::<V>(),
            invoke,
        });
        self
    }

    /// Register the conventionally named mutator with a body that may
    /// fail; the failure is preserved as the access error's cause.
    pub fn fallible_mutator(
        mut self,
        apply: impl Fn(&mut T, V) -> Result<(), BoxError> + Send + Sync + 'static,
    ) -> Self {
        let invoke: Box<MutatorFn> =
            Box::new(move |instance: &mut dyn Any, value: FieldValue| {
                let target = instance
                    .downcast_mut::<T>()
                    .ok_or(MutatorRejection::TargetTypeMismatch)?;
                let value = value
                    .downcast::<V>()
                    .map_err(|_| MutatorRejection::ValueTypeMismatch)?;
                apply(target, value).map_err(MutatorRejection::Failed)
            });
        self.mutators.push(MutatorDescriptor {
            name: derived_mutator_name(self.name),
            param_type: TypeId::of::<V>(),
            param_type_name: type_name::<V>(),
            invoke,
        });
        self
    }

    /// Fold the field into the type builder.
    ///
    /// # Panics
    /// On duplicate field or mutator names: that is descriptor
    /// misregistration, not a mapping-time condition.
    pub fn done(self) -> TypeDescriptorBuilder<T> {
        let mut builder = self.builder;
        assert!(
            !builder.field_index.contains_key(self.name),
            "duplicate field `{}` registered on `{}`",
            self.name,
            builder.type_name
        );
        let index = builder.fields.len();
        builder.fields.push(FieldDescriptor::new(
            self.name,
            type_name::<V>(),
            TypeId::of::<V>(),
            self.visibility,
            self.synthetic,
            self.markers,
            index,
        ));
        builder.field_index.insert(self.name, index);
        if let Some(reader) = self.reader {
            builder.readers.insert(self.name, reader);
        }
        if let Some(writer) = self.writer {
            builder.writers.insert(self.name, writer);
        }
        for mutator in self.mutators {
            assert!(
                !builder.mutators.contains_key(&mutator.name),
                "duplicate mutator `{}` registered on `{}`",
                mutator.name,
                builder.type_name
            );
            builder.mutators.insert(mutator.name.clone(), mutator);
        }
        builder
    }
}
