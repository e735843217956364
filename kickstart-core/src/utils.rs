//! Shared utility functions for code generation.

const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Convert a string to PascalCase (e.g., "find_pets-by status" -> "FindPetsByStatus").
///
/// Word boundaries are `_`, `-`, `.`, `/` and spaces; existing inner
/// capitals are kept so camelCase input maps naturally.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', '.', '/', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "X-Request-Id" -> "xRequestId").
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Turn an arbitrary name into a usable Kotlin identifier.
///
/// Keywords are escaped with backticks and names starting with a digit get a
/// leading underscore.
pub fn kotlin_ident(name: &str) -> String {
    let mut ident: String = to_camel_case(name)
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if ident.is_empty() {
        return "_".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if KOTLIN_KEYWORDS.contains(&ident.as_str()) {
        format!("`{}`", ident)
    } else {
        ident
    }
}

/// Render `s` as a double-quoted Kotlin string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Collapse line breaks so text can live on a single comment line.
pub fn strip_line_breaks(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
