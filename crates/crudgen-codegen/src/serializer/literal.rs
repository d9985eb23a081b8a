use super::{Formatter, ToJava};

/// A Java string literal
pub(super) struct JavaStr<'a>(pub(super) &'a str);

impl ToJava for JavaStr<'_> {
    fn to_java(self, f: &mut Formatter<'_>) {
        f.dst.push('"');

        for c in self.0.chars() {
            match c {
                '"' => f.dst.push_str("\\\""),
                '\\' => f.dst.push_str("\\\\"),
                '\n' => f.dst.push_str("\\n"),
                '\r' => f.dst.push_str("\\r"),
                '\t' => f.dst.push_str("\\t"),
                '\u{8}' => f.dst.push_str("\\b"),
                '\u{c}' => f.dst.push_str("\\f"),
                c if c.is_control() => f.dst.push_str(&format!("\\u{:04x}", c as u32)),
                c => f.dst.push(c),
            }
        }

        f.dst.push('"');
    }
}

impl ToJava for bool {
    fn to_java(self, f: &mut Formatter<'_>) {
        f.dst.push_str(if self { "true" } else { "false" });
    }
}
