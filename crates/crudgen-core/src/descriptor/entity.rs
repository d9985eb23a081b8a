use super::FieldDescriptor;
use crate::{ClassName, Error, Result};

use indexmap::IndexMap;
use std::collections::BTreeSet;

/// The persisted shape of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Entity class
    target_type: ClassName,

    /// Backing table
    table_name: String,

    /// Primary key, never repeated in `fields`
    pk_field: FieldDescriptor,

    /// Remaining fields in declaration order
    fields: IndexMap<String, FieldDescriptor>,
}

impl EntityDescriptor {
    pub fn builder(target_type: ClassName, table_name: impl Into<String>) -> EntityDescriptorBuilder {
        EntityDescriptorBuilder {
            target_type,
            table_name: table_name.into(),
            pk_field: None,
            fields: vec![],
            methods: None,
        }
    }

    pub fn target_type(&self) -> &ClassName {
        &self.target_type
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn pk_field(&self) -> &FieldDescriptor {
        &self.pk_field
    }

    /// Non-key fields, in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn fields_map(&self) -> &IndexMap<String, FieldDescriptor> {
        &self.fields
    }

    /// Looks up any field, including the primary key, by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        if self.pk_field.name() == name {
            Some(&self.pk_field)
        } else {
            self.fields.get(name)
        }
    }
}

/// Collects the parts of an [`EntityDescriptor`] and checks its invariants.
#[derive(Debug)]
pub struct EntityDescriptorBuilder {
    target_type: ClassName,
    table_name: String,
    pk_field: Option<FieldDescriptor>,
    fields: Vec<FieldDescriptor>,

    /// Methods declared on the entity type, when discovery knows them
    methods: Option<BTreeSet<String>>,
}

impl EntityDescriptorBuilder {
    pub fn pk(mut self, field: FieldDescriptor) -> Self {
        self.pk_field = Some(field);
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Declares the methods available on the entity type. When set, `build`
    /// checks that every field's getter and setter is among them.
    pub fn methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<EntityDescriptor> {
        let entity = self.target_type.canonical_name();

        if self.table_name.trim().is_empty() {
            return Err(Error::EmptyTableName { entity });
        }

        let Some(pk_field) = self.pk_field else {
            return Err(Error::MissingPrimaryKey { entity });
        };

        // The key type becomes a type argument of the repository
        if !pk_field.ty().is_reference() {
            return Err(Error::InvalidPrimaryKeyType {
                entity,
                ty: pk_field.ty().to_string(),
            });
        }

        let mut fields = IndexMap::with_capacity(self.fields.len());

        for field in self.fields {
            if field.name() == pk_field.name() {
                return Err(Error::PrimaryKeyInFields {
                    entity,
                    field: field.name().to_string(),
                });
            }

            if fields.contains_key(field.name()) {
                return Err(Error::DuplicateField {
                    entity,
                    field: field.name().to_string(),
                });
            }

            fields.insert(field.name().to_string(), field);
        }

        if let Some(methods) = &self.methods {
            for field in std::iter::once(&pk_field).chain(fields.values()) {
                let accessors = field.accessors();

                for accessor in [accessors.getter(), accessors.setter()] {
                    if !methods.contains(accessor) {
                        return Err(Error::MissingAccessor {
                            entity,
                            field: field.name().to_string(),
                            accessor: accessor.to_string(),
                        });
                    }
                }
            }
        }

        Ok(EntityDescriptor {
            target_type: self.target_type,
            table_name: self.table_name,
            pk_field,
            fields,
        })
    }
}
