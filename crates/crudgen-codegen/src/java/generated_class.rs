use super::{Call, ConstructorSpec, Stmt, TypeSpec};
use crate::serializer::Serializer;
use crate::Config;

use crudgen_core::{ClassName, TypeName};
use std::fmt;

/// A generated compilation unit: one class declaration in its package.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedClass {
    /// Fully qualified name of the class
    name: ClassName,

    /// The class declaration
    type_spec: TypeSpec,

    /// One level of indentation
    indent: String,

    /// Leave `java.lang` types out of the imports
    skip_java_lang_imports: bool,
}

impl GeneratedClass {
    pub(crate) fn new(name: ClassName, type_spec: TypeSpec, config: &Config) -> GeneratedClass {
        GeneratedClass {
            name,
            type_spec,
            indent: config.indent.clone(),
            skip_java_lang_imports: config.skip_java_lang_imports,
        }
    }

    pub fn name(&self) -> &ClassName {
        &self.name
    }

    pub fn package(&self) -> &str {
        self.name.package()
    }

    pub fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }

    pub fn superclass(&self) -> Option<&TypeName> {
        self.type_spec.superclass.as_ref()
    }

    pub fn superinterfaces(&self) -> &[TypeName] {
        &self.type_spec.superinterfaces
    }

    /// Generated repositories declare exactly one constructor.
    pub fn constructor(&self) -> &ConstructorSpec {
        &self.type_spec.constructors[0]
    }

    pub fn originating_elements(&self) -> &[ClassName] {
        &self.type_spec.originating_elements
    }

    /// The row mapper builder chain assigned in the constructor, from the
    /// `builder` call through the last registered field.
    pub fn mapper_chain(&self) -> Vec<&Call> {
        self.constructor()
            .body
            .iter()
            .find_map(|stmt| match stmt {
                Stmt::Local { init, .. } => Some(init.call_chain()),
                Stmt::Expr(_) => None,
            })
            .unwrap_or_default()
    }

    pub(crate) fn indent(&self) -> &str {
        &self.indent
    }

    pub(crate) fn skip_java_lang_imports(&self) -> bool {
        self.skip_java_lang_imports
    }

    /// Renders the Java source of the unit.
    pub fn to_source(&self) -> String {
        Serializer::new(self).serialize()
    }
}

impl fmt::Display for GeneratedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}
