//! scopesheet compiles declarative, nested "style trees" into a deduplicated
//! CSS stylesheet plus a mapping from each scope name to the generated class
//! names that reproduce that scope's styling.
//!
//! A style tree maps scope names to CSS-like declarations, with embedded
//! pseudo-selectors, media queries, `--` custom-property blocks, parent-class
//! preconditions and nested postconditions. Identical declarations under
//! equivalent selector conditions collapse to a single emitted class, while
//! the same declaration under different conditions stays distinct.
//!
//! ```
//! use scopesheet::{create_sheet, styles};
//!
//! let sheet = create_sheet("app");
//! let scoped = sheet.create(&styles! {
//!     "button" => styles! {
//!         "color" => "red",
//!         ":hover" => styles! { "color" => "blue" },
//!     },
//! });
//!
//! assert_eq!(scoped["button"].len(), 2);
//! assert!(sheet.get_style().contains("color: red;"));
//! ```
//!
//! The accumulated CSS text ([`StyleSheet::get_style`]) and the scope
//! mapping are the two outputs external collaborators consume; mounting the
//! text into a `<style>` element or an SSR snapshot is up to them.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

pub mod compile;
pub mod hash;
pub mod keyframes;
pub mod style;

pub use compile::tree::{StyleTree, StyleValue};
pub use compile::{ClassSet, ScopedStyles};
pub use hash::stable_hash;
pub use style::rule::Rule;
pub use style::selector::Selector;
pub use style::sheet::Sheet;

use compile::walker;

/// A handle to one named sheet. Clones share the same underlying sheet, the
/// way a component library keeps a single package-level sheet instance for
/// the lifetime of the process.
///
/// The sheet state sits behind one mutex held for a full call: the
/// dedup-check-then-append sequence is a read-modify-write and must not
/// interleave between callers.
#[derive(Clone)]
pub struct StyleSheet {
    inner: Arc<Mutex<Sheet>>,
}

/// Creates a sheet. `name` seeds every hash in the sheet's namespace, so two
/// sheets with different names never collide even on identical declarations.
pub fn create_sheet(name: &str) -> StyleSheet {
    StyleSheet {
        inner: Arc::new(Mutex::new(Sheet::new(name))),
    }
}

impl StyleSheet {
    /// Compiles a style tree, appending any new CSS to the sheet, and
    /// returns each scope's class-name set.
    ///
    /// The sheet commits once per call, however many rules were added.
    /// Re-submitting a structurally identical tree returns the same mapping
    /// and appends nothing.
    pub fn create(&self, styles: &StyleTree) -> ScopedStyles {
        let mut sheet = self.inner.lock();
        let sheet_name = sheet.name().to_string();

        let mut scopes = Vec::new();
        walker::collect_scopes(styles, &Selector::new(), &sheet_name, &mut scopes);

        let mut scoped = ScopedStyles::new();
        for (scope_name, subtree, selector) in scopes {
            let classes = walker::walk(&mut sheet, subtree, &selector);
            let entry = scoped.entry(scope_name).or_default();
            if classes.is_empty() {
                // A scope that produced no rule hash (variable-only,
                // pseudo-only or empty subtree) still maps to its own class
                // so its chunk blocks remain attachable.
                if let Some(class) = selector.scope_class_name() {
                    entry.insert(class.to_string());
                }
            } else {
                entry.extend(classes);
            }
        }

        sheet.apply();
        debug!(
            "sheet {:?}: compiled {} scopes, buffer is {} bytes",
            sheet_name,
            scoped.len(),
            sheet.style().len()
        );
        scoped
    }

    /// Emits uniquely named `@keyframes` blocks and returns the mapping from
    /// each animation name to its generated unique name.
    pub fn keyframes(&self, input: &StyleTree) -> HashMap<String, String> {
        let mut sheet = self.inner.lock();
        keyframes::add_keyframes(&mut sheet, input)
    }

    /// The full accumulated CSS text, e.g. for a server-rendering snapshot.
    pub fn get_style(&self) -> String {
        self.inner.lock().style().to_string()
    }

    /// Whether the sheet has been committed at least once.
    pub fn is_applied(&self) -> bool {
        self.inner.lock().is_applied()
    }
}
