//! Style system for built-in styles and user aliases.
//!
//! This module provides the core styling primitives:
//!
//! - [`SgrCode`]: A resolved terminal code (`1`, `38;5;3`, ...)
//! - [`StyleValue`]: The target of a user alias, one or more style names
//! - [`StyleRegistry`]: Built-in styles overlaid by validated user aliases
//! - [`StyleError`]: Errors from resolution and registration
//!
//! User styles can alias built-ins or other user styles, forming chains that
//! are expanded depth-first when resolved. Chains are checked for cycles when
//! the registry is built.

mod error;
mod registry;
mod table;
mod value;

pub use error::{StyleError, ThemeError};
pub use registry::{is_valid_style_name, StyleDefinition, StyleRegistry};
pub use table::{builtin_names as builtin_style_names, SgrCode};
pub use value::StyleValue;
