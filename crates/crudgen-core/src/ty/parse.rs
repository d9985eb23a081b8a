use super::{ClassName, Primitive, TypeName, WildcardBound};
use crate::{Error, Result};

pub(super) fn type_name(src: &str) -> Result<TypeName> {
    let mut parser = Parser { src, pos: 0 };
    let ty = parser.parse_type(Position::TopLevel)?;

    parser.skip_whitespace();

    if parser.pos != src.len() {
        return Err(parser.error("unexpected trailing input"));
    }

    Ok(ty)
}

/// Where a type appears, which decides the forms it may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Field type, superclass, ...
    TopLevel,

    /// Inside `<...>`
    Argument,

    /// After `? extends` / `? super`
    Bound,
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn parse_type(&mut self, position: Position) -> Result<TypeName> {
        self.skip_whitespace();

        if self.peek() == Some('?') {
            if position != Position::Argument {
                return Err(self.error("wildcards are only allowed as type arguments"));
            }

            self.pos += 1;
            return self.parse_wildcard();
        }

        let name = self.parse_dotted();

        if name.is_empty() {
            return Err(self.error("expected a type"));
        }

        let mut ty = match Primitive::from_keyword(name) {
            Some(primitive) => TypeName::Primitive(primitive),
            None => self.parse_class_type(name)?,
        };

        while self.eat('[') {
            if !self.eat(']') {
                return Err(self.error("expected `]`"));
            }

            ty = TypeName::array_of(ty);
        }

        if position != Position::TopLevel && !ty.is_reference() {
            return Err(self.error("primitive types cannot be type arguments"));
        }

        Ok(ty)
    }

    fn parse_class_type(&mut self, name: &str) -> Result<TypeName> {
        let raw = ClassName::parse(name).map_err(|_| {
            self.error("every segment must be a Java identifier and one must be a class name")
        })?;

        if !self.eat('<') {
            return Ok(TypeName::Class(raw));
        }

        let mut args = vec![];

        loop {
            args.push(self.parse_type(Position::Argument)?);

            if self.eat(',') {
                continue;
            }

            if self.eat('>') {
                break;
            }

            return Err(self.error("expected `,` or `>`"));
        }

        Ok(TypeName::Parameterized { raw, args })
    }

    /// The rest of a wildcard, after the `?`.
    fn parse_wildcard(&mut self) -> Result<TypeName> {
        self.skip_whitespace();

        let keyword = self.parse_dotted();

        let bound = match keyword {
            "" => None,
            "extends" => Some(WildcardBound::Extends(Box::new(
                self.parse_type(Position::Bound)?,
            ))),
            "super" => Some(WildcardBound::Super(Box::new(
                self.parse_type(Position::Bound)?,
            ))),
            _ => return Err(self.error("expected `extends` or `super`")),
        };

        Ok(TypeName::Wildcard(bound))
    }

    /// Reads a possibly dotted name, which may be empty.
    fn parse_dotted(&mut self) -> &'a str {
        let src = self.src;
        let start = self.pos;

        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' || c == '.' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }

        &src[start..self.pos]
    }

    /// Skips whitespace, then consumes `c` if it comes next.
    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();

        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn error(&self, reason: &'static str) -> Error {
        Error::InvalidTypeName {
            input: self.src.to_string(),
            reason,
        }
    }
}
