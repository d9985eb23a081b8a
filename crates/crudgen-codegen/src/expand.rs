mod class;
mod constructor;
mod superclass;

use crate::{Config, GeneratedClass};

use crudgen_core::{EntityDescriptor, RepositoryDescriptor, TypeName};

struct Expand<'a> {
    /// The repository being expanded
    descriptor: &'a RepositoryDescriptor,

    /// Runtime classes and output options
    config: &'a Config,
}

impl Expand<'_> {
    fn expand(&self) -> GeneratedClass {
        let type_spec = self.expand_type_spec();

        GeneratedClass::new(self.descriptor.name().clone(), type_spec, self.config)
    }

    fn entity(&self) -> &EntityDescriptor {
        self.descriptor.entity()
    }

    fn entity_type(&self) -> TypeName {
        self.entity().target_type().into()
    }

    /// `<pk type, entity type>`, shared by the base class, the mapper builder
    /// and the built mapper.
    fn key_entity_args(&self) -> Vec<TypeName> {
        vec![self.entity().pk_field().ty().clone(), self.entity_type()]
    }
}

pub(super) fn repository(descriptor: &RepositoryDescriptor, config: &Config) -> GeneratedClass {
    Expand { descriptor, config }.expand()
}
