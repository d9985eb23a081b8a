use super::{Driver, EntityDescriptor};
use crate::{ClassName, Error, Result, TypeName};

/// The repository interface a generated class implements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDeclaration {
    target_type: ClassName,
    driver: Driver,
}

impl RepositoryDeclaration {
    pub fn new(target_type: ClassName, driver: Driver) -> RepositoryDeclaration {
        RepositoryDeclaration {
            target_type,
            driver,
        }
    }

    /// The interface type.
    pub fn target_type(&self) -> &ClassName {
        &self.target_type
    }

    pub fn driver(&self) -> Driver {
        self.driver
    }
}

/// What the generated class extends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Extending {
    /// The dialect's default base class, parameterized by key and entity.
    #[default]
    Default,

    /// A caller supplied base, used exactly as given.
    Explicit(TypeName),
}

/// Everything needed to generate one repository class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    /// Class to generate
    name: ClassName,

    /// Interface to implement and the dialect it targets
    repository: RepositoryDeclaration,

    /// Entity the repository stores
    entity: EntityDescriptor,

    /// Superclass selection
    extending: Extending,
}

impl RepositoryDescriptor {
    /// The generated class is written as its own compilation unit, so `name`
    /// must be a top-level class.
    pub fn new(
        name: ClassName,
        repository: RepositoryDeclaration,
        entity: EntityDescriptor,
    ) -> Result<RepositoryDescriptor> {
        if !name.is_top_level() {
            return Err(Error::NestedClassName(name.canonical_name()));
        }

        Ok(RepositoryDescriptor {
            name,
            repository,
            entity,
            extending: Extending::Default,
        })
    }

    /// An explicit superclass must be a class or parameterized class type.
    pub fn with_extending(mut self, extending: Extending) -> Result<RepositoryDescriptor> {
        if let Extending::Explicit(ty) = &extending {
            if !ty.is_class() {
                return Err(Error::InvalidSuperclass(ty.to_string()));
            }
        }

        self.extending = extending;
        Ok(self)
    }

    /// `com.acme.repo.UserRepository` → `com.acme.repo.impl.UserRepositoryImpl`.
    pub fn default_name(interface: &ClassName) -> ClassName {
        let package = if interface.package().is_empty() {
            "impl".to_string()
        } else {
            format!("{}.impl", interface.package())
        };

        ClassName::new(package, format!("{}Impl", interface.simple_name()))
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    pub fn repository(&self) -> &RepositoryDeclaration {
        &self.repository
    }

    pub fn entity(&self) -> &EntityDescriptor {
        &self.entity
    }

    pub fn extending(&self) -> &Extending {
        &self.extending
    }
}
