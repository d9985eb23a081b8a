//! Generates Java repository classes from [`RepositoryDescriptor`]s.
//!
//! [`generate`] is a pure function from a descriptor to a [`GeneratedClass`],
//! the structural form of the class. Its rendered source comes from
//! [`GeneratedClass::to_source`]. Discovery and emission are plugged in through
//! [`DescriptorSource`] and [`UnitSink`].

mod config;
pub use config::{Config, DialectTable, GeneratedAnnotation, Runtime};

mod error;
pub use error::{Error, Result};

mod expand;

mod generator;
pub use generator::{Failure, Generator, Report};

pub mod java;
pub use java::GeneratedClass;

mod serializer;

pub mod sink;
pub use sink::{DirSink, MemorySink, UnitSink};

mod source;
pub use source::DescriptorSource;

pub use crudgen_core::RepositoryDescriptor;

/// Generates a repository class with the default [`Config`].
pub fn generate(descriptor: &RepositoryDescriptor) -> GeneratedClass {
    Generator::default().generate(descriptor)
}
