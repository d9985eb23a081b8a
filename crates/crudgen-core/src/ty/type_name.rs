use super::{parse, ClassName, Primitive};
use crate::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// A Java type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeName {
    Class(ClassName),
    Parameterized {
        raw: ClassName,
        args: Vec<TypeName>,
    },

    /// `int`, `boolean`, ...
    Primitive(Primitive),

    /// `elem[]`
    Array(Box<TypeName>),

    /// `?`, `? extends T` or `? super T`. Only valid as a type argument.
    Wildcard(Option<WildcardBound>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Extends(Box<TypeName>),
    Super(Box<TypeName>),
}

impl TypeName {
    /// `raw<args...>`. With no arguments this is the plain class.
    pub fn parameterized<I>(raw: ClassName, args: I) -> TypeName
    where
        I: IntoIterator,
        I::Item: Into<TypeName>,
    {
        let args: Vec<TypeName> = args.into_iter().map(Into::into).collect();

        if args.is_empty() {
            TypeName::Class(raw)
        } else {
            TypeName::Parameterized { raw, args }
        }
    }

    /// Parses `a.b.Raw<x.Y, z.W<...>>`, primitives and arrays such as
    /// `byte[]`, and `?` wildcards in type arguments.
    pub fn parse(src: &str) -> Result<TypeName> {
        parse::type_name(src)
    }

    pub fn array_of(elem: impl Into<TypeName>) -> TypeName {
        TypeName::Array(Box::new(elem.into()))
    }

    /// The class being referenced without type arguments, for class types.
    pub fn raw(&self) -> Option<&ClassName> {
        match self {
            TypeName::Class(class) => Some(class),
            TypeName::Parameterized { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn args(&self) -> &[TypeName] {
        match self {
            TypeName::Parameterized { args, .. } => args,
            _ => &[],
        }
    }

    /// A class or parameterized class, which is what a class can extend.
    pub fn is_class(&self) -> bool {
        self.raw().is_some()
    }

    /// Whether the type can be used as a type argument: a class type or an
    /// array.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            TypeName::Class(_) | TypeName::Parameterized { .. } | TypeName::Array(_)
        )
    }

    /// Calls `f` on every class this type mentions, outermost first.
    pub fn visit_class_names(&self, f: &mut impl FnMut(&ClassName)) {
        match self {
            TypeName::Class(class) => f(class),
            TypeName::Parameterized { raw, args } => {
                f(raw);

                for arg in args {
                    arg.visit_class_names(f);
                }
            }
            TypeName::Primitive(_) => {}
            TypeName::Array(elem) => elem.visit_class_names(f),
            TypeName::Wildcard(None) => {}
            TypeName::Wildcard(Some(WildcardBound::Extends(bound) | WildcardBound::Super(bound))) => {
                bound.visit_class_names(f)
            }
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> TypeName {
        TypeName::Class(class)
    }
}

impl From<Primitive> for TypeName {
    fn from(primitive: Primitive) -> TypeName {
        TypeName::Primitive(primitive)
    }
}

impl From<&ClassName> for TypeName {
    fn from(class: &ClassName) -> TypeName {
        TypeName::Class(class.clone())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Class(class) => write!(f, "{class}"),
            TypeName::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;

                let mut s = "";
                for arg in args {
                    write!(f, "{s}{arg}")?;
                    s = ", ";
                }

                write!(f, ">")
            }
            TypeName::Primitive(primitive) => write!(f, "{primitive}"),
            TypeName::Array(elem) => write!(f, "{elem}[]"),
            TypeName::Wildcard(None) => write!(f, "?"),
            TypeName::Wildcard(Some(WildcardBound::Extends(bound))) => {
                write!(f, "? extends {bound}")
            }
            TypeName::Wildcard(Some(WildcardBound::Super(bound))) => write!(f, "? super {bound}"),
        }
    }
}

impl FromStr for TypeName {
    type Err = Error;

    fn from_str(src: &str) -> Result<TypeName> {
        TypeName::parse(src)
    }
}

impl TryFrom<String> for TypeName {
    type Error = Error;

    fn try_from(src: String) -> Result<TypeName> {
        TypeName::parse(&src)
    }
}

impl From<TypeName> for String {
    fn from(ty: TypeName) -> String {
        ty.to_string()
    }
}
