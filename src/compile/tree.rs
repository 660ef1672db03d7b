//! The style-tree input model.
//!
//! A [`StyleTree`] is what callers hand to `create`: an insertion-ordered
//! mapping of keys (scope names, properties, pseudo-selectors, `@media`
//! queries, `.` / `--` markers) to values. Order is preserved because
//! declaration order drives emission order in the generated CSS.

/// A value in a style tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A plain CSS value, e.g. `"red"` or `"100px"`.
    Str(String),
    /// A bare number; rendered as-is, with no unit inference.
    Num(f64),
    /// A list of class names, only meaningful under the `"."` key.
    List(Vec<String>),
    /// A nested subtree (scope body, pseudo block, media block, variables).
    Tree(StyleTree),
}

impl StyleValue {
    /// The value as a CSS value string, if it is a scalar.
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            StyleValue::Str(s) => Some(s.clone()),
            StyleValue::Num(n) => Some(format_number(*n)),
            _ => None,
        }
    }
}

/// Integral values print without a decimal point, like `100`, not `100.0`.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Num(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Num(value as f64)
    }
}

impl From<StyleTree> for StyleValue {
    fn from(value: StyleTree) -> Self {
        StyleValue::Tree(value)
    }
}

impl From<Vec<&str>> for StyleValue {
    fn from(value: Vec<&str>) -> Self {
        StyleValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for StyleValue {
    fn from(value: Vec<String>) -> Self {
        StyleValue::List(value)
    }
}

/// An insertion-ordered style tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTree {
    entries: Vec<(String, StyleValue)>,
}

impl StyleTree {
    pub fn new() -> StyleTree {
        StyleTree::default()
    }

    /// Inserts an entry. Keys are trimmed, mirroring the permissive handling
    /// of authored trees where keys may carry stray whitespace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        self.entries.push((key.trim().to_string(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }
}

/// Builds a [`StyleTree`] literal.
///
/// ```
/// use scopesheet::styles;
///
/// let tree = styles! {
///     "color" => "red",
///     ":hover" => styles! { "color" => "blue" },
/// };
/// assert_eq!(tree.len(), 2);
/// ```
#[macro_export]
macro_rules! styles {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut tree = $crate::StyleTree::new();
        $( tree.insert($key, $value); )*
        tree
    }};
}
