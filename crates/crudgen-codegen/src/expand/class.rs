use super::Expand;
use crate::java::{AnnotationSpec, Expr, Modifier, TypeSpec};

impl Expand<'_> {
    pub(super) fn expand_type_spec(&self) -> TypeSpec {
        let interface = self.descriptor.repository().target_type();

        TypeSpec {
            name: self.descriptor.name().simple_name().to_string(),
            modifiers: vec![Modifier::Public],
            annotations: self.expand_annotations(),
            superclass: Some(self.expand_superclass()),
            superinterfaces: vec![interface.into()],
            constructors: vec![self.expand_constructor()],
            originating_elements: vec![interface.clone()],
        }
    }

    fn expand_annotations(&self) -> Vec<AnnotationSpec> {
        let Some(generated) = &self.config.generated else {
            return vec![];
        };

        let mut annotation = AnnotationSpec::new(generated.annotation.clone())
            .member("value", Expr::str(&generated.value));

        if let Some(comments) = &generated.comments {
            annotation = annotation.member("comments", Expr::str(comments));
        }

        vec![annotation]
    }
}
