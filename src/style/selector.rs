//! Immutable selector contexts.
//!
//! A [`Selector`] is a value in progress: an ordered chain of precondition
//! fragments (ancestors, applied with a descendant combinator), optionally
//! the current scope's own class name, and an ordered chain of postcondition
//! fragments nested under that class. Every mutator returns a new value, so
//! sibling branches of the tree walk never observe each other's state.

/// An in-progress selector context.
///
/// Invariant: rendering preconditions, then the class, then postconditions,
/// each with its joiner, always yields a syntactically valid CSS selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    preconditions: Vec<String>,
    scope_class_name: Option<String>,
    postconditions: Vec<String>,
}

impl Selector {
    pub fn new() -> Self {
        Selector::default()
    }

    /// Appends an ancestor fragment (e.g. a wrapping parent class).
    pub fn add_precondition(&self, fragment: &str) -> Selector {
        let mut next = self.clone();
        next.preconditions.push(fragment.to_string());
        next
    }

    /// Fixes the current scope's own class name.
    pub fn add_scope(&self, scope_class_name: &str) -> Selector {
        let mut next = self.clone();
        next.scope_class_name = Some(scope_class_name.to_string());
        next
    }

    /// Appends a fragment nested under the current scope (nested class,
    /// combinator, pseudo-selector or `&`-joined fragment).
    pub fn add_postcondition(&self, fragment: &str) -> Selector {
        let mut next = self.clone();
        next.postconditions.push(fragment.to_string());
        next
    }

    pub fn preconditions(&self) -> &[String] {
        &self.preconditions
    }

    pub fn postconditions(&self) -> &[String] {
        &self.postconditions
    }

    pub fn scope_class_name(&self) -> Option<&str> {
        self.scope_class_name.as_deref()
    }

    /// All condition fragments, preconditions first, joined by commas.
    /// Feeds both the dedup key and the hash seed of a rule; the scope
    /// *name* never appears here.
    pub fn condition_key(&self) -> String {
        self.preconditions
            .iter()
            .chain(self.postconditions.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Renders the full selector text around `class_name`.
    ///
    /// Preconditions are joined by single spaces to the left of the class.
    /// A postcondition joins without a space when it starts with `:`, with
    /// its leading `&` stripped and no space when it starts with `&`, and
    /// with one leading space otherwise.
    pub fn render(&self, class_name: &str) -> String {
        let mut out = String::new();
        for pre in &self.preconditions {
            out.push_str(pre);
            out.push(' ');
        }
        out.push('.');
        out.push_str(class_name);
        for post in &self.postconditions {
            if let Some(stripped) = post.strip_prefix('&') {
                out.push_str(stripped);
            } else if post.starts_with(':') {
                out.push_str(post);
            } else {
                out.push(' ');
                out.push_str(post);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutators_return_new_values() {
        let base = Selector::new();
        let with_pre = base.add_precondition(".wrapper");

        assert!(base.preconditions().is_empty());
        assert_eq!(with_pre.preconditions(), [".wrapper".to_string()]);
    }

    #[test]
    fn renders_bare_class() {
        assert_eq!(Selector::new().render("abc"), ".abc");
    }

    #[test]
    fn preconditions_render_left_to_right() {
        let selector = Selector::new()
            .add_precondition(".top")
            .add_precondition(".mid");
        assert_eq!(selector.render("abc"), ".top .mid .abc");
    }

    #[test]
    fn pseudo_postcondition_joins_without_space() {
        let selector = Selector::new().add_postcondition(":hover");
        assert_eq!(selector.render("abc"), ".abc:hover");
    }

    #[test]
    fn ampersand_postcondition_concatenates() {
        let selector = Selector::new().add_postcondition("&.active");
        assert_eq!(selector.render("abc"), ".abc.active");

        let pseudo = Selector::new().add_postcondition("&::before");
        assert_eq!(pseudo.render("abc"), ".abc::before");
    }

    #[test]
    fn other_postconditions_join_with_space() {
        let nested = Selector::new().add_postcondition(".child");
        assert_eq!(nested.render("abc"), ".abc .child");

        let child = Selector::new().add_postcondition("> li");
        assert_eq!(child.render("abc"), ".abc > li");
    }

    #[test]
    fn postconditions_accumulate_in_order() {
        let selector = Selector::new()
            .add_postcondition(".child")
            .add_postcondition(":hover");
        assert_eq!(selector.render("abc"), ".abc .child:hover");
    }

    #[test]
    fn condition_key_is_comma_joined() {
        let selector = Selector::new()
            .add_precondition(".top")
            .add_precondition(".mid")
            .add_postcondition(":hover");
        assert_eq!(selector.condition_key(), ".top,.mid,:hover");
        assert_eq!(Selector::new().condition_key(), "");
    }

    #[test]
    fn scope_class_is_tracked() {
        let selector = Selector::new().add_scope("sheet_2p");
        assert_eq!(selector.scope_class_name(), Some("sheet_2p"));
        assert_eq!(Selector::new().scope_class_name(), None);
    }
}
