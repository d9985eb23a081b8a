use super::is_identifier;
use crate::{Error, Result};

use std::fmt;
use std::str::FromStr;

/// A fully qualified reference to a Java class.
///
/// Nested classes keep every enclosing simple name, outermost first. The
/// default package is represented by an empty package string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Creates a top-level class reference.
    ///
    /// Neither part is validated; use [`ClassName::parse`] for user input.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> ClassName {
        ClassName {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Parses a dotted name, guessing where the package ends.
    ///
    /// Segments before the first one starting with an upper-case letter form
    /// the package, the rest are the (possibly nested) simple names. This is
    /// the usual Java convention and the only information a plain string
    /// carries.
    pub fn parse(src: &str) -> Result<ClassName> {
        let invalid = |reason| Error::InvalidTypeName {
            input: src.to_string(),
            reason,
        };

        let segments: Vec<&str> = src.trim().split('.').collect();

        if segments.iter().any(|segment| !is_identifier(segment)) {
            return Err(invalid("every segment must be a Java identifier"));
        }

        let Some(split) = segments
            .iter()
            .position(|segment| segment.starts_with(|c: char| c.is_uppercase()))
        else {
            return Err(invalid("no segment looks like a class name"));
        };

        Ok(ClassName {
            package: segments[..split].join("."),
            simple_names: segments[split..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Returns a reference to a class nested inside this one.
    pub fn nested(&self, simple_name: impl Into<String>) -> ClassName {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());

        ClassName {
            package: self.package.clone(),
            simple_names,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The outermost enclosing class, which is what an `import` names.
    pub fn top_level(&self) -> ClassName {
        ClassName {
            package: self.package.clone(),
            simple_names: self.simple_names[..1].to_vec(),
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.simple_names.len() == 1
    }

    pub fn is_java_lang(&self) -> bool {
        self.package == "java.lang"
    }

    /// `package.Outer.Inner`, or just `Outer.Inner` in the default package.
    pub fn canonical_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}.", self.package)?;
        }

        write!(f, "{}", self.simple_names.join("."))
    }
}

impl FromStr for ClassName {
    type Err = Error;

    fn from_str(src: &str) -> Result<ClassName> {
        ClassName::parse(src)
    }
}

impl TryFrom<String> for ClassName {
    type Error = Error;

    fn try_from(src: String) -> Result<ClassName> {
        ClassName::parse(&src)
    }
}

impl From<ClassName> for String {
    fn from(name: ClassName) -> String {
        name.canonical_name()
    }
}
