//! Style resolution and registration errors.

use thiserror::Error;

/// Error returned when a style cannot be resolved or registered.
///
/// All variants are recoverable argument errors. The messages are stable and
/// are meant to be shown to users as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The style name (or a name reached through an alias) is unknown, or a
    /// `color[N]` index is outside `0..=255`.
    #[error("Invalid style {0}")]
    InvalidStyle(String),

    /// A user style key does not match `[a-z_]+`.
    #[error("{0} is not a valid style name")]
    InvalidStyleName(String),

    /// A user style expands back to itself, directly or through other aliases.
    #[error("User style cannot reference itself.")]
    Recursion {
        /// The user style whose expansion loops.
        name: String,
    },
}

/// Error returned when a theme cannot be loaded from configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Style(#[from] StyleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_style_display() {
        let err = StyleError::InvalidStyle("foo".to_string());
        assert_eq!(err.to_string(), "Invalid style foo");
    }

    #[test]
    fn test_invalid_style_keeps_parametrized_form() {
        let err = StyleError::InvalidStyle("color[256]".to_string());
        assert_eq!(err.to_string(), "Invalid style color[256]");
    }

    #[test]
    fn test_invalid_style_name_display() {
        let err = StyleError::InvalidStyleName("foo-bar".to_string());
        assert_eq!(err.to_string(), "foo-bar is not a valid style name");
    }

    #[test]
    fn test_recursion_display() {
        let err = StyleError::Recursion {
            name: "green".to_string(),
        };
        assert_eq!(err.to_string(), "User style cannot reference itself.");
    }

    #[test]
    fn test_theme_error_wraps_style_error() {
        let err: ThemeError = StyleError::InvalidStyleName("A".to_string()).into();
        assert_eq!(err.to_string(), "A is not a valid style name");
    }
}
