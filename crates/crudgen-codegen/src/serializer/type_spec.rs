use super::{Comma, Formatter, Spaced, ToJava};
use crate::java::{AnnotationSpec, ConstructorSpec, Expr, Modifier, ParameterSpec, TypeSpec};

impl ToJava for &TypeSpec {
    fn to_java(self, f: &mut Formatter<'_>) {
        for annotation in &self.annotations {
            fmt!(f, annotation);
            f.newline();
        }

        if !self.modifiers.is_empty() {
            fmt!(f, Spaced(&self.modifiers) " ");
        }

        let name = &self.name;
        fmt!(f, "class " name);

        if let Some(superclass) = &self.superclass {
            fmt!(f, " extends " superclass);
        }

        if !self.superinterfaces.is_empty() {
            fmt!(f, " implements " Comma(&self.superinterfaces));
        }

        fmt!(f, " {\n");
        f.depth += 1;

        for (i, constructor) in self.constructors.iter().enumerate() {
            if i > 0 {
                f.newline();
            }

            ConstructorDecl {
                name: &self.name,
                constructor,
            }
            .to_java(f);
        }

        f.depth -= 1;
        fmt!(f, "}\n");
    }
}

impl ToJava for &AnnotationSpec {
    fn to_java(self, f: &mut Formatter<'_>) {
        let ty = &self.ty;
        fmt!(f, "@" ty);

        match &self.members[..] {
            [] => {}
            [(name, value)] if name == "value" => fmt!(f, "(" value ")"),
            members => {
                let members = members.iter().map(|(name, value)| Member(name, value));
                fmt!(f, "(" Comma(members) ")");
            }
        }
    }
}

struct Member<'a>(&'a str, &'a Expr);

impl ToJava for Member<'_> {
    fn to_java(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " = " self.1);
    }
}

impl ToJava for &Modifier {
    fn to_java(self, f: &mut Formatter<'_>) {
        fmt!(f, self.keyword());
    }
}

impl ToJava for &ParameterSpec {
    fn to_java(self, f: &mut Formatter<'_>) {
        let (ty, name) = (&self.ty, &self.name);
        fmt!(f, ty " " name);
    }
}

/// A constructor together with the name of its class
struct ConstructorDecl<'a> {
    name: &'a str,
    constructor: &'a ConstructorSpec,
}

impl ToJava for ConstructorDecl<'_> {
    fn to_java(self, f: &mut Formatter<'_>) {
        let constructor = self.constructor;

        f.indent();

        if !constructor.modifiers.is_empty() {
            fmt!(f, Spaced(&constructor.modifiers) " ");
        }

        fmt!(f, self.name "(" Comma(&constructor.params) ") {\n");
        f.depth += 1;

        for stmt in &constructor.body {
            stmt.to_java(f);
        }

        f.depth -= 1;
        f.indent();
        fmt!(f, "}\n");
    }
}
