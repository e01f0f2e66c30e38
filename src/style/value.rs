//! Alias targets for user styles.

use serde::{Deserialize, Serialize};

/// What a user style expands to: one style name, or several applied in order.
///
/// Deserializes from either a string or a list of strings, so a theme file
/// can say `error: red` as well as `alert: [red, bold]`.
///
/// # Example
///
/// ```rust
/// use tinct::StyleValue;
///
/// let single: StyleValue = "red".into();
/// let many: StyleValue = vec!["red", "bold"].into();
///
/// assert_eq!(single.targets(), &["red".to_string()]);
/// assert_eq!(many.targets().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Single(String),
    Many(Vec<String>),
}

impl StyleValue {
    /// Returns the target style names in application order.
    pub fn targets(&self) -> &[String] {
        match self {
            StyleValue::Single(name) => std::slice::from_ref(name),
            StyleValue::Many(names) => names,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Single(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Single(name)
    }
}

impl From<Vec<String>> for StyleValue {
    fn from(names: Vec<String>) -> Self {
        StyleValue::Many(names)
    }
}

impl From<Vec<&str>> for StyleValue {
    fn from(names: Vec<&str>) -> Self {
        StyleValue::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for StyleValue {
    fn from(names: [&str; N]) -> Self {
        StyleValue::Many(names.iter().map(|name| (*name).to_string()).collect())
    }
}
