//! fieldwise: runtime field-by-field record mapping
//!
//! Copies same-named field values from an arbitrary source record into a
//! newly created instance of an arbitrary target record type. The two
//! types share no ancestor and no compile-time contract; the link between
//! them is a per-type registered descriptor table (this crate's stand-in
//! for runtime reflection). The pipeline is pluggable at three seams:
//! - Descriptor: per-type field tables, accessor closures, constructors
//! - Exclusion: AND-composed policies deciding field eligibility
//! - Factory: how the target instance is instantiated
//! - Insertion: direct field write vs. conventional mutator invocation
//! - Mapper: the facade orchestrating one synchronous pass
//!
//! ```
//! use fieldwise::{Mapper, Record, TypeDescriptor, TypeDescriptorBuilder};
//! use once_cell::sync::Lazy;
//!
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct UserDto {
//!     id: u64,
//!     name: String,
//! }
//!
//! static USER: Lazy<TypeDescriptor> = Lazy::new(|| {
//!     TypeDescriptorBuilder::<User>::new("User")
//!         .field::<u64>("id").get(|u| u.id).done()
//!         .field::<String>("name").get(|u| u.name.clone()).done()
//!         .build()
//! });
//!
//! static USER_DTO: Lazy<TypeDescriptor> = Lazy::new(|| {
//!     TypeDescriptorBuilder::<UserDto>::new("UserDto")
//!         .constructor(UserDto::default)
//!         .field::<u64>("id").mutator(|u, v| u.id = v).done()
//!         .field::<String>("name").mutator(|u, v| u.name = v).done()
//!         .build()
//! });
//!
//! impl Record for User {
//!     fn descriptor() -> &'static TypeDescriptor { &USER }
//! }
//! impl Record for UserDto {
//!     fn descriptor() -> &'static TypeDescriptor { &USER_DTO }
//! }
//!
//! let user = User { id: 7, name: "Ada".into() };
//! let dto: UserDto = Mapper::new().map_object(&user).unwrap();
//! assert_eq!(dto, UserDto { id: 7, name: "Ada".into() });
//! ```

pub mod config;
pub mod descriptor;
pub mod errors;
pub mod mapper;
pub mod strategy;
pub mod telemetry;

// Re-exports for convenience
pub use config::{InsertionMode, MappingConfig};
pub use descriptor::{
    derived_mutator_name, markers, FieldBinding, FieldDescriptor, FieldValue, MutatorDescriptor,
    MutatorRejection, Record, TypeDescriptor, TypeDescriptorBuilder, Visibility, WriteRejection,
    RESERVED_PREFIX,
};
pub use errors::{
    BoxError, FieldAccessError, FieldNotFoundError, FieldwiseErrorCode, InstantiationError,
    MapError, MapResult, MappingError, SetterNotFoundError,
};
pub use mapper::{Mapper, MapperBuilder};
pub use strategy::{
    CompositeExclusion, ConstructorFactory, DirectFieldInsertion, ExclusionPolicy,
    FieldExclusionStrategy, FieldValueInsertionStrategy, MarkerExclusionPolicy, MutatorInsertion,
    ObjectFactory, ReservedNamePolicy, VisibilityExclusionPolicy,
};
