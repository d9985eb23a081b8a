use super::{Comma, Formatter, ToJava};

use crudgen_core::{ClassName, TypeName, WildcardBound};

impl ToJava for &ClassName {
    fn to_java(self, f: &mut Formatter<'_>) {
        if f.serializer.imports.is_usable(self) {
            fmt!(f, self.simple_names().join("."));
        } else {
            fmt!(f, self.canonical_name());
        }
    }
}

impl ToJava for &TypeName {
    fn to_java(self, f: &mut Formatter<'_>) {
        match self {
            TypeName::Class(class) => class.to_java(f),
            TypeName::Parameterized { raw, args } => {
                fmt!(f, raw "<" Comma(args) ">");
            }
            TypeName::Primitive(primitive) => fmt!(f, primitive.keyword()),
            TypeName::Array(elem) => {
                let elem: &TypeName = elem;
                fmt!(f, elem "[]");
            }
            TypeName::Wildcard(None) => fmt!(f, "?"),
            TypeName::Wildcard(Some(WildcardBound::Extends(bound))) => {
                let bound: &TypeName = bound;
                fmt!(f, "? extends " bound);
            }
            TypeName::Wildcard(Some(WildcardBound::Super(bound))) => {
                let bound: &TypeName = bound;
                fmt!(f, "? super " bound);
            }
        }
    }
}
