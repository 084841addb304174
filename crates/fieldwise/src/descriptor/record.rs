//! Ties a type to its registered descriptor.

use std::any::Any;

use super::type_descriptor::TypeDescriptor;

/// A type participating in mapping: it exposes the descriptor table that
/// the mapper introspects in place of runtime reflection.
///
/// Descriptors are built once and kept in a static:
///
/// ```
/// use fieldwise::{Record, TypeDescriptor, TypeDescriptorBuilder};
/// use once_cell::sync::Lazy;
///
/// #[derive(Default)]
/// struct Account {
///     id: u64,
/// }
///
/// static ACCOUNT: Lazy<TypeDescriptor> = Lazy::new(|| {
///     TypeDescriptorBuilder::<Account>::new("Account")
///         .constructor(Account::default)
///         .field::<u64>("id")
///         .get(|a| a.id)
///         .set(|a, v| a.id = v)
///         .mutator(|a, v| a.id = v)
///         .done()
///         .build()
/// });
///
/// impl Record for Account {
///     fn descriptor() -> &'static TypeDescriptor {
///         &ACCOUNT
///     }
/// }
///
/// assert_eq!(Account::descriptor().type_name(), "Account");
/// ```
pub trait Record: Any {
    /// The registered descriptor table for this type.
    fn descriptor() -> &'static TypeDescriptor
    where
        Self: Sized;
}
