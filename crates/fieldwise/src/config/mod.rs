//! Plain configuration structs for wiring a mapper without touching the
//! strategy traits directly.

mod mapping_config;

pub use mapping_config::{InsertionMode, MappingConfig};
