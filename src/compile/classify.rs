//! Key-shape classification.
//!
//! Each key in a style tree is classified exactly once into a closed variant
//! and then dispatched over, instead of scattering string-prefix tests
//! across the walker.

/// The shape of one style-tree key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// `"."` — direct class injection, no CSS emitted.
    DirectClass,
    /// `"--"` — a CSS custom-property block.
    VariableBlock,
    /// `"@media …"` — a media-query wrapper.
    MediaQuery,
    /// A selector fragment: `*`, or a key starting with `:`, `>`, `~`, `.`,
    /// `+`, `*` or `&`. A precondition at the top level, a postcondition
    /// inside a scope.
    Condition,
    /// Anything else: a plain property name when its value is a scalar.
    Property,
}

/// Classifies a (trimmed) style-tree key.
pub fn classify(key: &str) -> KeyShape {
    match key {
        "." => return KeyShape::DirectClass,
        "--" => return KeyShape::VariableBlock,
        "*" => return KeyShape::Condition,
        _ => {}
    }

    if key.starts_with("@media") {
        return KeyShape::MediaQuery;
    }

    let starts_like_condition = matches!(
        key.chars().next(),
        Some(':' | '>' | '~' | '.' | '+' | '*' | '&')
    );
    if starts_like_condition && key.len() > 1 {
        return KeyShape::Condition;
    }

    KeyShape::Property
}
