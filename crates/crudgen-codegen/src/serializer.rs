#[macro_use]
mod fmt;
use fmt::ToJava;

mod delim;
use delim::{Comma, Spaced};

mod expr;

mod imports;
use imports::Imports;

mod literal;
use literal::JavaStr;

mod ty;

mod type_spec;

use crate::GeneratedClass;

/// Serialize a generated class to Java source
#[derive(Debug)]
pub(crate) struct Serializer<'a> {
    /// Unit being serialized
    class: &'a GeneratedClass,

    /// Classes that may be written by their simple name
    imports: Imports,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized source
    dst: &'a mut String,

    /// Current block nesting, in indentation levels
    depth: usize,
}

impl<'a> Serializer<'a> {
    pub(crate) fn new(class: &'a GeneratedClass) -> Serializer<'a> {
        Serializer {
            class,
            imports: Imports::collect(class),
        }
    }

    pub(crate) fn serialize(&self) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            depth: 0,
        };

        fmt.file();
        ret
    }
}

impl Formatter<'_> {
    fn file(&mut self) {
        let serializer = self.serializer;
        let class = serializer.class;
        let package = class.package();

        if !package.is_empty() {
            fmt!(self, "package " package ";\n\n");
        }

        let imports = serializer
            .imports
            .import_list(package, class.skip_java_lang_imports());

        if !imports.is_empty() {
            for import in imports {
                fmt!(self, "import " import.canonical_name() ";\n");
            }

            self.newline();
        }

        class.type_spec().to_java(self);
    }

    fn indent(&mut self) {
        let indent = self.serializer.class.indent();

        for _ in 0..self.depth {
            self.dst.push_str(indent);
        }
    }

    fn newline(&mut self) {
        self.dst.push('\n');
    }

    /// Breaks a method chain: the next call starts on its own line, two
    /// levels deeper than the statement it belongs to.
    fn continuation(&mut self) {
        self.newline();
        self.depth += 2;
        self.indent();
        self.depth -= 2;
    }
}
