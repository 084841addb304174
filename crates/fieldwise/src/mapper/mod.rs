//! The mapping facade: orchestrates enumerate → exclude → create →
//! insert over a bound strategy set.

mod builder;
mod facade;

pub use builder::MapperBuilder;
pub use facade::Mapper;
