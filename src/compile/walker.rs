//! The recursive tree walker.
//!
//! `collect_scopes` resolves the top level of an input tree into
//! `(scope name, subtree, selector)` triples, peeling precondition wrappers
//! as it goes. `walk` then interprets one scope subtree, driving selector
//! composition and asking the sheet to emit and deduplicate CSS.
//!
//! Unrecognized entries are skipped, never an error: style trees are data,
//! and an authoring mistake must not take down the caller.

use log::debug;

use crate::compile::classify::{classify, KeyShape};
use crate::compile::tree::{StyleTree, StyleValue};
use crate::compile::ClassSet;
use crate::hash::stable_hash;
use crate::style::rule::{declaration, Rule};
use crate::style::selector::Selector;
use crate::style::sheet::Sheet;

/// A scope resolved from the top level of an input tree: its name, its
/// subtree, and the selector carrying the full precondition chain plus the
/// scope's own class.
pub type ResolvedScope<'t> = (String, &'t StyleTree, Selector);

/// Scans the top level of `tree`, recursing through precondition wrappers
/// (which may nest arbitrarily deep) and fixing each scope's class name.
pub fn collect_scopes<'t>(
    tree: &'t StyleTree,
    selector: &Selector,
    sheet_name: &str,
    out: &mut Vec<ResolvedScope<'t>>,
) {
    for (key, value) in tree.iter() {
        match (classify(key), value) {
            (KeyShape::Condition, StyleValue::Tree(subtree)) => {
                collect_scopes(subtree, &selector.add_precondition(key), sheet_name, out);
            }
            (_, StyleValue::Tree(subtree)) => {
                let scope_class = stable_hash(sheet_name, key);
                out.push((key.to_string(), subtree, selector.add_scope(&scope_class)));
            }
            _ => {
                debug!("skipping top-level entry {:?}: not a scope", key);
            }
        }
    }
}

/// Walks one scope subtree, returning the class names this subtree
/// contributed.
pub fn walk(sheet: &mut Sheet, tree: &StyleTree, selector: &Selector) -> ClassSet {
    let mut output = ClassSet::new();

    for (key, value) in tree.iter() {
        match (classify(key), value) {
            (KeyShape::Condition, StyleValue::Tree(subtree)) => {
                output.extend(walk(sheet, subtree, &selector.add_postcondition(key)));
            }
            (KeyShape::DirectClass, StyleValue::Str(class)) => {
                output.insert(class.clone());
            }
            (KeyShape::DirectClass, StyleValue::List(classes)) => {
                output.extend(classes.iter().cloned());
            }
            (KeyShape::MediaQuery, StyleValue::Tree(subtree)) => {
                output.extend(media_block(sheet, subtree, key, selector));
            }
            (KeyShape::VariableBlock, StyleValue::Tree(variables)) => {
                output.extend(variables_block(sheet, variables, selector));
            }
            (KeyShape::Property, value) => {
                if let Some(scalar) = value.as_scalar() {
                    let rule = Rule::new(sheet.name(), key, &scalar, selector.clone());
                    output.insert(sheet.add_rule(&rule));
                } else {
                    debug!("skipping {:?}: value is not a CSS value", key);
                }
            }
            _ => {
                debug!("skipping {:?}: unrecognized key/value combination", key);
            }
        }
    }

    output
}

/// Opens an `@media` block, walks the subtree under the *same* selector and
/// closes the block. Rules inside go through the normal dedup path; only the
/// braces are special. A block whose body emitted no new text is rolled back
/// so re-compilation appends nothing.
fn media_block(sheet: &mut Sheet, tree: &StyleTree, query: &str, selector: &Selector) -> ClassSet {
    let before = sheet.mark();
    sheet.append(&format!("{} {{", query));
    let opened = sheet.mark();

    let inner = walk(sheet, tree, selector);

    if sheet.mark() == opened {
        sheet.rewind(before);
    } else {
        sheet.append("}");
    }
    inner
}

/// Emits a `--`-block: scalar entries become one chunk line scoped to the
/// current selector, nested trees are walked under the same selector, and
/// the scope's own class joins the output so the chunk is attachable even
/// when the scope has no plain declaration.
fn variables_block(sheet: &mut Sheet, variables: &StyleTree, selector: &Selector) -> ClassSet {
    let mut classes = ClassSet::new();
    let mut rows: Vec<String> = Vec::new();

    for (key, value) in variables.iter() {
        if let Some(scalar) = value.as_scalar() {
            rows.push(declaration(key, &scalar));
        } else if let StyleValue::Tree(subtree) = value {
            classes.extend(walk(sheet, subtree, selector));
        } else {
            debug!("skipping variable entry {:?}", key);
        }
    }

    let Some(scope_class) = selector.scope_class_name() else {
        // No scope to pin the chunk to while still resolving preconditions.
        return classes;
    };

    if !rows.is_empty() {
        let line = format!("{} {{ {} }}", selector.render(scope_class), rows.join(" "));
        sheet.append_unique(&line);
    }

    classes.insert(scope_class.to_string());
    classes
}
