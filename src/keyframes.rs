//! `@keyframes` generation.
//!
//! Keyframe blocks bypass the per-property dedup path: stage declarations
//! are emitted verbatim per animation, because keyframe content is not meant
//! to be shared across scopes the way rules are. Uniqueness comes from the
//! sheet's sequence counter instead.

use std::collections::HashMap;

use log::debug;

use crate::compile::tree::{StyleTree, StyleValue};
use crate::style::rule::declaration;
use crate::style::sheet::Sheet;

/// Emits one `@keyframes` block per named animation in `input` and returns
/// a mapping from each logical animation name to its generated unique name
/// (`"{sheet}_{seq}_{name}"`), for interpolation into an `animation` value.
///
/// `input` maps animation names to stage trees, and stages to declarations.
/// Entries that do not fit that shape are skipped.
pub fn add_keyframes(sheet: &mut Sheet, input: &StyleTree) -> HashMap<String, String> {
    let mut names = HashMap::new();
    let sheet_name = sheet.name().to_string();

    for (animation, stages) in input.iter() {
        let StyleValue::Tree(stages) = stages else {
            debug!("skipping keyframes entry {:?}: no stages", animation);
            continue;
        };

        let unique = format!("{}_{}_{}", sheet_name, sheet.seq(), animation);
        sheet.append(&format!("@keyframes {} {{", unique));

        for (stage, declarations) in stages.iter() {
            let StyleValue::Tree(declarations) = declarations else {
                debug!("skipping stage {:?} of {:?}", stage, animation);
                continue;
            };

            sheet.append(&format!("{} {{", stage));
            for (property, value) in declarations.iter() {
                if let Some(scalar) = value.as_scalar() {
                    sheet.append_inline(&format!(" {}", declaration(property, &scalar)));
                } else {
                    debug!("skipping keyframe declaration {:?}", property);
                }
            }
            sheet.append_inline(" }");
        }

        sheet.append("}");
        names.insert(animation.to_string(), unique);
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles;

    #[test]
    fn emits_named_blocks() {
        let mut sheet = Sheet::new("test");
        let names = add_keyframes(
            &mut sheet,
            &styles! {
                "fade" => styles! {
                    "from" => styles! { "opacity" => "0" },
                    "to" => styles! { "opacity" => "1" },
                },
            },
        );

        assert_eq!(names.get("fade").map(String::as_str), Some("test_0_fade"));
        assert_eq!(
            sheet.style(),
            "@keyframes test_0_fade {\nfrom { opacity: 0; }\nto { opacity: 1; }\n}"
        );
    }

    #[test]
    fn repeated_calls_get_fresh_names() {
        let mut sheet = Sheet::new("test");
        let input = styles! {
            "spin" => styles! {
                "to" => styles! { "transform" => "rotate(360deg)" },
            },
        };

        let first = add_keyframes(&mut sheet, &input);
        let second = add_keyframes(&mut sheet, &input);

        assert_eq!(first.get("spin").map(String::as_str), Some("test_0_spin"));
        assert_eq!(second.get("spin").map(String::as_str), Some("test_1_spin"));
        // Both blocks are in the buffer: keyframes are never deduplicated.
        assert_eq!(sheet.style().matches("@keyframes").count(), 2);
    }

    #[test]
    fn skips_malformed_entries() {
        let mut sheet = Sheet::new("test");
        let names = add_keyframes(&mut sheet, &styles! { "broken" => "not-stages" });

        assert!(names.is_empty());
        assert_eq!(sheet.style(), "");
    }
}
