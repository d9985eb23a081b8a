//! Descriptor model for generated repositories.
//!
//! Descriptors are built once per discovered entity / repository pair,
//! validated on construction and never mutated afterwards. The code generator
//! consumes them without re-checking any of the invariants enforced here.

mod error;
pub use error::{Error, Result};

pub mod descriptor;
pub use descriptor::{
    Accessors, Driver, EntityDescriptor, EntityDescriptorBuilder, Extending, FieldDescriptor,
    RepositoryDeclaration, RepositoryDescriptor,
};

pub mod ty;
pub use ty::{ClassName, Primitive, TypeName, WildcardBound};
