//! # Tinct - Named Styles for Terminal Text
//!
//! Tinct wraps text in ANSI escape sequences by style name and strips them
//! back out. It provides:
//!
//! - Built-in styles (`bold`, `red`, `bg_red`, ...) and 256-color styles
//!   (`color[N]`, `bg_color[N]`)
//! - User style aliases with override and cycle detection
//! - Inline style tags: `<red>text <bold>more</bold></red>`
//! - Escape-aware width measurement and centering
//! - Output mode control (Auto/Term/Text) with a force override
//!
//! ## Core Concepts
//!
//! - [`Color`]: The configured styler, and entry point for everything else
//! - [`Styled`]: A fluent chain of styling steps over one piece of text
//! - [`StyleRegistry`]: Built-in styles overlaid by validated user aliases
//! - [`Theme`]: User aliases as configuration, from code, YAML, or JSON
//! - [`TagParser`]: The inline tag interpreter
//! - [`OutputMode`]: Whether escape codes are emitted
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{Color, OutputMode, Theme};
//!
//! let mut color = Color::with_mode(OutputMode::Term);
//! color
//!     .set_theme(&Theme::new().add("error", "red").add("alert", ["error", "bold"]))
//!     .unwrap();
//!
//! let alert = color.apply("alert", "disk full").unwrap();
//! assert_eq!(alert, "\x1b[1m\x1b[31mdisk full\x1b[0m\x1b[0m");
//!
//! let line = color.colorize("status: <error>failed</error>").unwrap();
//! assert_eq!(color.clean(&line), "status: failed");
//! ```
//!
//! ## Nesting
//!
//! Every style is its own self-terminated wrap. Applying `white` then `bold`
//! to `foo` gives `ESC[1m ESC[97m foo ESC[0m ESC[0m`: the later style is on
//! the outside, and each one carries its own reset.
//!
//! ## Output Modes
//!
//! [`OutputMode::Auto`] asks the terminal; [`OutputMode::Term`] and
//! [`OutputMode::Text`] pin the answer. With styles disabled (and not forced
//! with [`Color::set_force_style`]) styling returns text unchanged and tags
//! are removed rather than applied.

pub mod codec;
mod color;
mod output;
pub mod style;
mod tags;
mod theme;
mod util;

pub use color::{Color, Styled};
pub use output::OutputMode;
pub use style::{
    builtin_style_names, is_valid_style_name, SgrCode, StyleDefinition, StyleError,
    StyleRegistry, StyleValue, ThemeError,
};
pub use tags::{TagParser, TagTransform};
pub use theme::Theme;
pub use util::{center, clean, display_width, visible_width};

/// Applies a style to `text` with built-in styles and terminal detection.
///
/// Shorthand for [`Color::new`] followed by [`Color::apply`].
///
/// # Errors
///
/// Returns [`StyleError::InvalidStyle`] for unknown names when styles are
/// enabled.
pub fn apply_style(name: &str, text: &str) -> Result<String, StyleError> {
    Color::new().apply(name, text)
}
