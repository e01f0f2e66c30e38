//! Built-in style table.
//!
//! Maps canonical style names to their SGR parameters. Besides the plain
//! entries there are two parametrized families:
//!
//! | Name | SGR |
//! |------|-----|
//! | `color[N]` | `38;5;N` |
//! | `bg_color[N]` | `48;5;N` |
//!
//! where `N` is a palette index in `0..=255`.

use std::fmt;

/// A terminal style definition, rendered as the parameter list of an SGR
/// escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SgrCode {
    /// A single SGR parameter, such as `1` (bold) or `31` (red).
    Plain(u8),
    /// A 256-color foreground, `38;5;N`.
    Fg256(u8),
    /// A 256-color background, `48;5;N`.
    Bg256(u8),
}

impl fmt::Display for SgrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SgrCode::Plain(code) => write!(f, "{}", code),
            SgrCode::Fg256(index) => write!(f, "38;5;{}", index),
            SgrCode::Bg256(index) => write!(f, "48;5;{}", index),
        }
    }
}

/// Text attributes.
const ATTRIBUTES: &[(&str, u8)] = &[
    ("bold", 1),
    ("dark", 2),
    ("italic", 3),
    ("underline", 4),
    ("blink", 5),
    ("reverse", 7),
    ("concealed", 8),
];

/// Foreground colors. Each one also has a `bg_` variant at `code + 10`.
const COLORS: &[(&str, u8)] = &[
    ("default", 39),
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("light_gray", 37),
    ("dark_gray", 90),
    ("light_red", 91),
    ("light_green", 92),
    ("light_yellow", 93),
    ("light_blue", 94),
    ("light_magenta", 95),
    ("light_cyan", 96),
    ("white", 97),
];

const BACKGROUND_PREFIX: &str = "bg_";
const BACKGROUND_OFFSET: u8 = 10;

/// Looks up a built-in style by its lowercase name.
///
/// Returns `None` for unknown names and for `color[...]` forms whose index
/// is not a valid palette entry.
pub fn lookup(name: &str) -> Option<SgrCode> {
    if let Some(code) = find(ATTRIBUTES, name).or_else(|| find(COLORS, name)) {
        return Some(SgrCode::Plain(code));
    }

    if let Some(index) = palette_index(name, "color") {
        return Some(SgrCode::Fg256(index));
    }

    if let Some(rest) = name.strip_prefix(BACKGROUND_PREFIX) {
        if let Some(code) = find(COLORS, rest) {
            return Some(SgrCode::Plain(code + BACKGROUND_OFFSET));
        }
        if let Some(index) = palette_index(rest, "color") {
            return Some(SgrCode::Bg256(index));
        }
    }

    None
}

/// Iterates over all plain built-in style names.
///
/// Parametrized names are not listed; they are recognized by [`lookup`].
pub fn builtin_names() -> impl Iterator<Item = String> {
    ATTRIBUTES
        .iter()
        .chain(COLORS.iter())
        .map(|(name, _)| (*name).to_string())
        .chain(
            COLORS
                .iter()
                .map(|(name, _)| format!("{}{}", BACKGROUND_PREFIX, name)),
        )
}

fn find(table: &[(&str, u8)], name: &str) -> Option<u8> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, code)| *code)
}

/// Parses `family[N]` with 1 to 3 ASCII digits and `N <= 255`.
fn palette_index(name: &str, family: &str) -> Option<u8> {
    let digits = name
        .strip_prefix(family)?
        .strip_prefix('[')?
        .strip_suffix(']')?;

    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<u8>().ok()
}
