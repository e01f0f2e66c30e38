//! Style registry: built-in styles overlaid by user aliases.

use std::collections::{HashMap, HashSet};

use super::error::StyleError;
use super::table::{self, SgrCode};
use super::value::StyleValue;

/// What a style name is defined as once the user table has been merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDefinition<'a> {
    /// A terminal code from the built-in table.
    Code(SgrCode),
    /// A user alias expanding to other style names, in order.
    Alias(&'a [String]),
}

/// A registry of named styles.
///
/// The built-in table is always present. User styles are aliases to one or
/// more other style names and shadow built-ins of the same name entirely.
///
/// A registry is immutable once built: every user table is validated up
/// front, so resolution on a constructed registry always terminates.
///
/// # Example
///
/// ```rust
/// use tinct::{SgrCode, StyleRegistry};
///
/// let registry = StyleRegistry::with_user_styles([
///     ("error", "red".into()),
///     ("alert", vec!["error", "bold"].into()),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     registry.resolve("alert").unwrap(),
///     vec![SgrCode::Plain(31), SgrCode::Plain(1)],
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    user: HashMap<String, StyleValue>,
}

impl StyleRegistry {
    /// Creates a registry with only the built-in styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the given user styles merged over the
    /// built-ins.
    ///
    /// # Errors
    ///
    /// - [`StyleError::InvalidStyleName`] if a key is not made of lowercase
    ///   letters and `_`. Keys are checked in input order.
    /// - [`StyleError::Recursion`] if any user style expands back to itself.
    pub fn with_user_styles<I, K>(styles: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (K, StyleValue)>,
        K: Into<String>,
    {
        let mut user = HashMap::new();
        let mut order = Vec::new();

        for (name, value) in styles {
            let name = name.into();
            if !is_valid_style_name(&name) {
                return Err(StyleError::InvalidStyleName(name));
            }
            if user.insert(name.clone(), value).is_none() {
                order.push(name);
            }
        }

        let registry = Self { user };
        for name in &order {
            registry.check_cycle(name)?;
        }

        log::debug!("installed {} user style(s)", order.len());
        Ok(registry)
    }

    /// Returns true if `name` resolves to a definition at the top level.
    ///
    /// Aliases are not expanded, so an alias to an unknown style still counts.
    pub fn has(&self, name: &str) -> bool {
        self.definition(&name.to_lowercase()).is_some()
    }

    /// Returns true if a user style named `name` exists.
    pub fn has_user_style(&self, name: &str) -> bool {
        self.user.contains_key(&name.to_lowercase())
    }

    /// Returns the user style names, sorted.
    pub fn user_style_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.user.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of user styles.
    pub fn user_style_count(&self) -> usize {
        self.user.len()
    }

    /// Returns the definition for a lowercase style name.
    ///
    /// User styles are consulted first and never fall through to a
    /// shadowed built-in.
    pub fn definition(&self, name: &str) -> Option<StyleDefinition<'_>> {
        if let Some(value) = self.user.get(name) {
            return Some(StyleDefinition::Alias(value.targets()));
        }
        table::lookup(name).map(StyleDefinition::Code)
    }

    /// Resolves a style name to the ordered list of codes it applies.
    ///
    /// Lookup is case-insensitive. Aliases are expanded depth-first,
    /// left to right, so `alert = [error, bold]` with `error = red` yields
    /// red then bold.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidStyle`] naming the first unknown style
    /// met during expansion, spelled as it was given.
    pub fn resolve(&self, name: &str) -> Result<Vec<SgrCode>, StyleError> {
        let mut codes = Vec::new();
        // Pending names, reversed so the leftmost target is popped first.
        let mut stack: Vec<&str> = vec![name];

        while let Some(current) = stack.pop() {
            match self.definition(&current.to_lowercase()) {
                Some(StyleDefinition::Code(code)) => codes.push(code),
                Some(StyleDefinition::Alias(targets)) => {
                    stack.extend(targets.iter().rev().map(String::as_str));
                }
                None => return Err(StyleError::InvalidStyle(current.to_string())),
            }
        }

        Ok(codes)
    }

    /// Walks every alias reachable from `start` and fails if `start` is met
    /// again.
    fn check_cycle(&self, start: &str) -> Result<(), StyleError> {
        let mut expanded: HashSet<String> = HashSet::new();
        let mut stack: Vec<String> = self.user_targets(start);

        while let Some(current) = stack.pop() {
            if current == start {
                return Err(StyleError::Recursion {
                    name: start.to_string(),
                });
            }
            if !expanded.insert(current.clone()) {
                continue;
            }
            stack.extend(self.user_targets(&current));
        }

        Ok(())
    }

    fn user_targets(&self, name: &str) -> Vec<String> {
        self.user
            .get(name)
            .map(|value| value.targets().iter().map(|t| t.to_lowercase()).collect())
            .unwrap_or_default()
    }
}

/// Returns true if `name` is made of lowercase ASCII letters and `_` only.
pub fn is_valid_style_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
}
