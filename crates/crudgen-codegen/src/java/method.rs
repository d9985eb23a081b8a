use super::{Modifier, Stmt};

use crudgen_core::TypeName;

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub ty: TypeName,
    pub name: String,
}

impl ParameterSpec {
    pub fn new(ty: impl Into<TypeName>, name: impl Into<String>) -> ParameterSpec {
        ParameterSpec {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorSpec {
    pub modifiers: Vec<Modifier>,
    pub params: Vec<ParameterSpec>,
    pub body: Vec<Stmt>,
}
