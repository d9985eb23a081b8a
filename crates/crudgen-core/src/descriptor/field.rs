use crate::ty::is_identifier;
use crate::{Error, Result, TypeName};

/// Getter / setter pair used to read and write a field on the entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accessors {
    getter: String,
    setter: String,
}

impl Accessors {
    pub fn new(getter: impl Into<String>, setter: impl Into<String>) -> Result<Accessors> {
        let getter = getter.into();
        let setter = setter.into();

        for name in [&getter, &setter] {
            if !is_identifier(name) {
                return Err(Error::InvalidIdentifier(name.clone()));
            }
        }

        Ok(Accessors { getter, setter })
    }

    /// `get<suffix>` / `set<suffix>`.
    pub fn conventional(suffix: &str) -> Accessors {
        Accessors {
            getter: format!("get{suffix}"),
            setter: format!("set{suffix}"),
        }
    }

    pub fn getter(&self) -> &str {
        &self.getter
    }

    pub fn setter(&self) -> &str {
        &self.setter
    }
}

/// One persisted attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within the entity
    name: String,

    /// Type of the stored value
    ty: TypeName,

    /// Accessors on the entity type, fixed at construction
    accessors: Accessors,
}

impl FieldDescriptor {
    /// Creates a field with the conventional `get<Name>` / `set<Name>`
    /// accessors. Any field type is accepted except a bare wildcard.
    pub fn new(name: impl Into<String>, ty: impl Into<TypeName>) -> Result<FieldDescriptor> {
        let name = name.into();

        if !is_identifier(&name) {
            return Err(Error::InvalidIdentifier(name));
        }

        let ty = ty.into();

        if let TypeName::Wildcard(_) = ty {
            return Err(Error::InvalidTypeName {
                input: ty.to_string(),
                reason: "wildcards are only allowed as type arguments",
            });
        }

        let accessors = Accessors::conventional(&accessor_suffix(&name));

        Ok(FieldDescriptor {
            name,
            ty,
            accessors,
        })
    }

    /// Replaces the conventional accessors with an explicit pair.
    pub fn with_accessors(mut self, accessors: Accessors) -> FieldDescriptor {
        self.accessors = accessors;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeName {
        &self.ty
    }

    pub fn accessors(&self) -> &Accessors {
        &self.accessors
    }

    pub fn accessor_suffix(&self) -> String {
        accessor_suffix(&self.name)
    }
}

/// The field name with its first character upper-cased.
///
/// Only the first character changes: `createdAt` becomes `CreatedAt` and
/// `created_at` becomes `Created_at`.
pub fn accessor_suffix(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_only_touches_first_char() {
        assert_eq!(accessor_suffix("total"), "Total");
        assert_eq!(accessor_suffix("createdAt"), "CreatedAt");
        assert_eq!(accessor_suffix("created_at"), "Created_at");
        assert_eq!(accessor_suffix("URL"), "URL");
        assert_eq!(accessor_suffix("_x"), "_x");
        assert_eq!(accessor_suffix(""), "");
    }
}
