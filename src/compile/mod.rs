use std::collections::{BTreeSet, HashMap};

pub mod classify;
pub mod tree;
pub mod walker;

/// The class names attached to one scope. Set semantics: the consumer only
/// needs unique membership, and ordered iteration keeps downstream joining
/// deterministic.
pub type ClassSet = BTreeSet<String>;

/// Compiler output: scope name -> class names to apply for that scope.
pub type ScopedStyles = HashMap<String, ClassSet>;
