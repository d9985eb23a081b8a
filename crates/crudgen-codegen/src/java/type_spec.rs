use super::{AnnotationSpec, ConstructorSpec, Modifier};

use crudgen_core::{ClassName, TypeName};

/// A class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    /// Simple name of the class
    pub name: String,

    pub modifiers: Vec<Modifier>,

    pub annotations: Vec<AnnotationSpec>,

    pub superclass: Option<TypeName>,

    pub superinterfaces: Vec<TypeName>,

    pub constructors: Vec<ConstructorSpec>,

    /// Source elements this class is generated from. Build tools use these
    /// to decide when the class must be regenerated; they are not rendered.
    pub originating_elements: Vec<ClassName>,
}

impl TypeSpec {
    /// Calls `f` on every class referenced from the rendered declaration.
    pub fn visit_class_names(&self, f: &mut impl FnMut(&ClassName)) {
        for annotation in &self.annotations {
            f(&annotation.ty);

            for (_, value) in &annotation.members {
                value.visit_class_names(f);
            }
        }

        if let Some(superclass) = &self.superclass {
            superclass.visit_class_names(f);
        }

        for interface in &self.superinterfaces {
            interface.visit_class_names(f);
        }

        for constructor in &self.constructors {
            for param in &constructor.params {
                param.ty.visit_class_names(f);
            }

            for stmt in &constructor.body {
                stmt.expr().visit_class_names(f);
            }
        }
    }
}
