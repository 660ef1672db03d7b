//! The append-only CSS buffer and its memo tables.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::style::rule::Rule;

/// Accumulates CSS text for one named sheet and deduplicates rules.
///
/// The memo tables are owned by the instance, never shared between sheets:
/// two sheets with different names are fully independent namespaces.
#[derive(Debug)]
pub struct Sheet {
    name: String,
    style: String,
    /// Dedup identity -> emitted class hash.
    stored_classes: HashMap<String, String>,
    /// Reverse index, hash -> (property, value), for introspection.
    stored_styles: HashMap<String, (String, String)>,
    /// Chunk lines already emitted (CSS-variable blocks bypass per-property
    /// hashing but must still not repeat on re-compilation).
    stored_chunks: HashSet<String>,
    count: u64,
}

impl Sheet {
    pub fn new(name: &str) -> Sheet {
        Sheet {
            name: name.to_string(),
            style: String::new(),
            stored_classes: HashMap::new(),
            stored_styles: HashMap::new(),
            stored_chunks: HashSet::new(),
            count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a rule, deduplicating on its key. Every declaration in
    /// context passes through here exactly once per unique key.
    ///
    /// The presence check is explicit on purpose: a stored hash is a valid
    /// entry whatever its text, so the lookup must never be a truthiness
    /// test on the value.
    pub fn add_rule(&mut self, rule: &Rule) -> String {
        if let Some(existing) = self.stored_classes.get(rule.key()) {
            trace!("dedup hit for {:?} -> {}", rule.key(), existing);
            return existing.clone();
        }

        self.stored_classes
            .insert(rule.key().to_string(), rule.hash().to_string());
        self.stored_styles.insert(
            rule.hash().to_string(),
            (rule.property().to_string(), rule.value().to_string()),
        );
        self.append(&rule.to_css());
        rule.hash().to_string()
    }

    /// Appends a full line to the buffer.
    pub fn append(&mut self, line: &str) {
        if !self.style.is_empty() {
            self.style.push('\n');
        }
        self.style.push_str(line);
    }

    /// Appends without a newline, extending the current physical line.
    /// Used to build multi-declaration chunk and keyframe-stage lines.
    pub fn append_inline(&mut self, text: &str) {
        self.style.push_str(text);
    }

    /// Appends a chunk line at most once per sheet. Returns whether the line
    /// was new.
    pub fn append_unique(&mut self, line: &str) -> bool {
        if self.stored_chunks.contains(line) {
            trace!("chunk already emitted: {:?}", line);
            return false;
        }
        self.stored_chunks.insert(line.to_string());
        self.append(line);
        true
    }

    /// Current buffer length; pairs with [`Sheet::rewind`] to drop
    /// speculative text (an opened `@media` block whose body emitted
    /// nothing).
    pub(crate) fn mark(&self) -> usize {
        self.style.len()
    }

    pub(crate) fn rewind(&mut self, mark: usize) {
        self.style.truncate(mark);
    }

    /// Commits the buffer once per top-level compile call.
    pub fn apply(&mut self) {
        self.count += 1;
    }

    pub fn is_applied(&self) -> bool {
        self.count > 0
    }

    /// Returns the current sequence value and advances it. Keyframe naming
    /// relies on this for uniqueness across repeated calls.
    pub fn seq(&mut self) -> u64 {
        let current = self.count;
        self.count += 1;
        current
    }

    /// The full accumulated CSS text.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Looks up the declaration behind an emitted class hash.
    pub fn stored_style(&self, hash: &str) -> Option<(&str, &str)> {
        self.stored_styles
            .get(hash)
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }
}
