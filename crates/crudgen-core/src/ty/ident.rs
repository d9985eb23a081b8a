const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Returns `true` if `src` can be used as a Java identifier.
pub fn is_identifier(src: &str) -> bool {
    let mut chars = src.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }

    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') && !KEYWORDS.contains(&src)
}

#[cfg(test)]
mod tests {
    use super::is_identifier;

    #[test]
    fn accepts_plain_names() {
        assert!(is_identifier("id"));
        assert!(is_identifier("createdAt"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$tmp"));
        assert!(is_identifier("total2"));
    }

    #[test]
    fn rejects_keywords_and_garbage() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("class"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("has-dash"));
        assert!(!is_identifier("a.b"));
    }
}
