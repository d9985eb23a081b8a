mod driver;
pub use driver::Driver;

mod entity;
pub use entity::{EntityDescriptor, EntityDescriptorBuilder};

mod field;
pub use field::{accessor_suffix, Accessors, FieldDescriptor};

mod repository;
pub use repository::{Extending, RepositoryDeclaration, RepositoryDescriptor};
