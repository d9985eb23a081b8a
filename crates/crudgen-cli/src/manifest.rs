//! JSON manifest describing the repositories to generate.
//!
//! ```json
//! {
//!   "config": { "indent": "    " },
//!   "repositories": [
//!     {
//!       "interface": "com.acme.repo.OrderRepository",
//!       "driver": "postgresql",
//!       "entity": {
//!         "type": "com.acme.model.Order",
//!         "pk": { "name": "id", "type": "java.lang.Long" },
//!         "fields": [{ "name": "total", "type": "java.lang.Double" }]
//!       }
//!     }
//!   ]
//! }
//! ```

use crudgen_codegen::{Config, DescriptorSource};
use crudgen_core::{
    Accessors, ClassName, Driver, EntityDescriptor, Extending, FieldDescriptor,
    RepositoryDeclaration, RepositoryDescriptor, TypeName,
};

use anyhow::{Context, Result};
use heck::ToSnakeCase;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generation settings, defaults when absent
    #[serde(default)]
    pub config: Config,

    pub repositories: Vec<RepositoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryEntry {
    /// Repository interface the generated class implements
    pub interface: ClassName,

    /// Generated class name, `<package>.impl.<Interface>Impl` when absent
    pub name: Option<ClassName>,

    pub driver: Driver,

    /// Explicit superclass, replacing the dialect default
    pub extends: Option<TypeName>,

    pub entity: EntityEntry,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityEntry {
    #[serde(rename = "type")]
    pub ty: ClassName,

    /// Table name, derived from the entity name when absent
    pub table: Option<String>,

    pub pk: FieldEntry,

    #[serde(default)]
    pub fields: Vec<FieldEntry>,

    /// Methods declared on the entity, used to check accessors
    pub methods: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeName,

    pub getter: Option<String>,
    pub setter: Option<String>,
}

impl Manifest {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Manifest> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;

        let manifest = Manifest::parse(&contents)
            .with_context(|| format!("failed to parse manifest {}", path.display()))?;

        debug!(
            "loaded manifest {} ({} repositories)",
            path.display(),
            manifest.repositories.len()
        );

        Ok(manifest)
    }

    pub fn parse(src: &str) -> Result<Manifest> {
        Ok(serde_json::from_str(src)?)
    }

    /// Builds a validated descriptor for every repository entry.
    pub fn to_descriptors(&self) -> crudgen_core::Result<Vec<RepositoryDescriptor>> {
        self.repositories
            .iter()
            .map(RepositoryEntry::to_descriptor)
            .collect()
    }
}

impl DescriptorSource for Manifest {
    type Error = crudgen_core::Error;

    fn descriptors(&mut self) -> crudgen_core::Result<Vec<RepositoryDescriptor>> {
        self.to_descriptors()
    }
}

impl RepositoryEntry {
    pub fn to_descriptor(&self) -> crudgen_core::Result<RepositoryDescriptor> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => RepositoryDescriptor::default_name(&self.interface),
        };

        debug!("repository {} generates {name} ({})", self.interface, self.driver);

        let extending = match &self.extends {
            Some(ty) => Extending::Explicit(ty.clone()),
            None => Extending::Default,
        };

        let descriptor = RepositoryDescriptor::new(
            name,
            RepositoryDeclaration::new(self.interface.clone(), self.driver),
            self.entity.to_descriptor()?,
        )?;

        descriptor.with_extending(extending)
    }
}

impl EntityEntry {
    pub fn to_descriptor(&self) -> crudgen_core::Result<EntityDescriptor> {
        let table = match &self.table {
            Some(table) => table.clone(),
            None => default_table_name(&self.ty),
        };

        let fields = self
            .fields
            .iter()
            .map(FieldEntry::to_descriptor)
            .collect::<crudgen_core::Result<Vec<_>>>()?;

        let mut builder = EntityDescriptor::builder(self.ty.clone(), table)
            .pk(self.pk.to_descriptor()?)
            .fields(fields);

        if let Some(methods) = &self.methods {
            builder = builder.methods(methods.iter().cloned());
        }

        builder.build()
    }
}

impl FieldEntry {
    /// Missing accessors fall back to `get<Name>` / `set<Name>`.
    pub fn to_descriptor(&self) -> crudgen_core::Result<FieldDescriptor> {
        let field = FieldDescriptor::new(self.name.clone(), self.ty.clone())?;

        if self.getter.is_none() && self.setter.is_none() {
            return Ok(field);
        }

        let getter = self.getter.as_deref().unwrap_or(field.accessors().getter());
        let setter = self.setter.as_deref().unwrap_or(field.accessors().setter());
        let accessors = Accessors::new(getter, setter)?;

        Ok(field.with_accessors(accessors))
    }
}

/// `OrderItem` → `order_items`
pub fn default_table_name(entity: &ClassName) -> String {
    pluralizer::pluralize(&entity.simple_name().to_snake_case(), 2, false)
}
