use super::Expr;

use crudgen_core::ClassName;

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSpec {
    /// Annotation type
    pub ty: ClassName,

    /// `name = value` members, in declaration order
    pub members: Vec<(String, Expr)>,
}

impl AnnotationSpec {
    pub fn new(ty: ClassName) -> AnnotationSpec {
        AnnotationSpec { ty, members: vec![] }
    }

    pub fn member(mut self, name: impl Into<String>, value: Expr) -> AnnotationSpec {
        self.members.push((name.into(), value));
        self
    }

    /// Looks up a member value by name.
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.members
            .iter()
            .find(|(member, _)| member == name)
            .map(|(_, value)| value)
    }
}
