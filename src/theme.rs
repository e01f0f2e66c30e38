//! Themes: named collections of user styles.
//!
//! A [`Theme`] is the configuration side of the style registry. It can be
//! built in code with a fluent API or loaded from YAML or JSON, where each key
//! is a style name and each value is a style name or a list of them:
//!
//! ```yaml
//! error: red
//! alert: [error, bold]
//! title: [white, "bg_color[24]"]
//! ```

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::style::{StyleError, StyleRegistry, StyleValue, ThemeError};

/// An ordered collection of user style aliases.
///
/// Entries keep the order they were added in, which is the order names are
/// validated in when the theme is installed.
///
/// # Example
///
/// ```rust
/// use tinct::Theme;
///
/// let theme = Theme::new()
///     .add("error", "red")
///     .add("alert", ["error", "bold"]);
///
/// assert_eq!(theme.len(), 2);
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    styles: Vec<(String, StyleValue)>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated theme for chaining.
    ///
    /// Adding a name twice replaces the earlier value in place.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        let value = value.into();
        match self.styles.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value,
            None => self.styles.push((name.to_string(), value)),
        }
        self
    }

    /// Loads a theme from a YAML mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Yaml`] if the document is not a mapping of
    /// names to a style name or list of style names.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads a theme from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Json`] if the document does not have the
    /// expected shape.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Writes the theme as a YAML mapping, entries in insertion order.
    pub fn to_yaml(&self) -> Result<String, ThemeError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Writes the theme as a JSON object, entries in insertion order.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the styles in insertion order.
    pub fn styles(&self) -> &[(String, StyleValue)] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Builds a registry with this theme's styles over the built-ins.
    ///
    /// # Errors
    ///
    /// See [`StyleRegistry::with_user_styles`].
    pub fn to_registry(&self) -> Result<StyleRegistry, StyleError> {
        StyleRegistry::with_user_styles(self.styles.iter().cloned())
    }

    /// Checks style names and alias cycles without installing the theme.
    ///
    /// Aliases to unknown styles are not reported here; they fail when used.
    pub fn validate(&self) -> Result<(), StyleError> {
        self.to_registry().map(|_| ())
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Theme {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Theme::new(), |theme, (name, value)| {
                let name: String = name.into();
                theme.add(&name, value)
            })
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.styles.len()))?;
        for (name, value) in &self.styles {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ThemeVisitor)
    }
}

struct ThemeVisitor;

impl<'de> Visitor<'de> for ThemeVisitor {
    type Value = Theme;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of style names to a style name or list of style names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Theme, A::Error> {
        let mut theme = Theme::new();
        while let Some((name, value)) = map.next_entry::<String, StyleValue>()? {
            theme = theme.add(&name, value);
        }
        Ok(theme)
    }
}
