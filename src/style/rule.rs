//! A single CSS declaration bound to a selector context.

use crate::hash::stable_hash;
use crate::style::selector::Selector;

/// One `property: value` declaration captured with the [`Selector`] it was
/// declared under.
///
/// The dedup `key` is the joined declaration plus every condition fragment;
/// two rules with the same property and value under different selector
/// contexts are different rules. The `hash` is a pure function of the key
/// (seeded by the sheet name), so identical declarations in differently
/// *named* but equivalently conditioned scopes collapse to one class.
#[derive(Debug, Clone)]
pub struct Rule {
    property: String,
    value: String,
    selector: Selector,
    key: String,
    hash: String,
}

impl Rule {
    pub fn new(sheet_name: &str, property: &str, value: &str, selector: Selector) -> Rule {
        let joined = joined_property(property, value);
        let key = format!("{}{}", joined, selector.condition_key());
        let hash = stable_hash(sheet_name, &key);
        Rule {
            property: property.to_string(),
            value: value.to_string(),
            selector,
            key,
            hash,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Renders the full CSS line, e.g. `.p1 .sheet_x1y2:hover { color: red; }`.
    pub fn to_css(&self) -> String {
        format!(
            "{} {{ {} }}",
            self.selector.render(&self.hash),
            declaration(&self.property, &self.value)
        )
    }
}

/// `property:value`, the first half of a rule's identity.
pub fn joined_property(property: &str, value: &str) -> String {
    format!("{}:{}", property, value)
}

/// Renders one declaration: dashed property, transformed value, trailing
/// semicolon.
pub fn declaration(property: &str, value: &str) -> String {
    format!(
        "{}: {};",
        camel_to_dash(property),
        handle_property_value(property, value)
    )
}

/// `content` values must be emitted as CSS string literals; everything else
/// passes through unchanged (values are expected to already be valid CSS).
fn handle_property_value(property: &str, value: &str) -> String {
    if property == "content" {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// `backgroundColor` -> `background-color`. The whole property is lowercased;
/// a dash is inserted at every lower-to-upper boundary.
pub fn camel_to_dash(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    let mut prev_lower = false;
    for ch in property.chars() {
        if ch.is_ascii_uppercase() && prev_lower {
            out.push('-');
        }
        prev_lower = ch.is_ascii_lowercase();
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_properties_become_kebab_case() {
        assert_eq!(camel_to_dash("backgroundColor"), "background-color");
        assert_eq!(camel_to_dash("color"), "color");
        assert_eq!(camel_to_dash("WebkitTransform"), "webkit-transform");
        assert_eq!(camel_to_dash("--base"), "--base");
    }

    #[test]
    fn content_values_are_quoted() {
        assert_eq!(declaration("content", "hello"), "content: \"hello\";");
        assert_eq!(declaration("color", "red"), "color: red;");
    }

    #[test]
    fn key_includes_conditions() {
        let plain = Rule::new("test", "color", "red", Selector::new());
        assert_eq!(plain.key(), "color:red");

        let conditioned = Rule::new(
            "test",
            "color",
            "red",
            Selector::new().add_precondition(".p1"),
        );
        assert_eq!(conditioned.key(), "color:red.p1");
        assert_ne!(plain.hash(), conditioned.hash());
    }

    #[test]
    fn hash_ignores_scope_name() {
        // Two scopes with different names but identical conditions share a
        // class: only the selector conditions seed the hash.
        let a = Rule::new("test", "color", "red", Selector::new().add_scope("test_2p"));
        let b = Rule::new("test", "color", "red", Selector::new().add_scope("test_2q"));
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.hash(), "test_wqxq0q");
    }

    #[test]
    fn css_line_renders_selector_and_declaration() {
        let rule = Rule::new(
            "test",
            "color",
            "red",
            Selector::new()
                .add_precondition(".p1")
                .add_postcondition(":hover"),
        );
        assert_eq!(
            rule.to_css(),
            format!(".p1 .{}:hover {{ color: red; }}", rule.hash())
        );
    }
}
