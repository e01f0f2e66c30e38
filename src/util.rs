//! Width measurement and centering for styled text.
//!
//! Escape sequences are zero-width everywhere in this module.

use unicode_width::UnicodeWidthStr;

use crate::codec::strip;

/// Removes all styling from `text`. Same as [`codec::strip`](crate::codec::strip).
pub fn clean(text: &str) -> String {
    strip(text)
}

/// Returns the number of codepoints in `text` once styling is removed.
///
/// This is the unit [`center`] pads to: one column per codepoint.
///
/// # Example
///
/// ```rust
/// use tinct::visible_width;
///
/// assert_eq!(visible_width("\x1b[31m✩\x1b[0m"), 1);
/// ```
pub fn visible_width(text: &str) -> usize {
    strip(text).chars().count()
}

/// Returns the terminal column width of `text` once styling is removed.
///
/// Unlike [`visible_width`], wide characters such as CJK ideographs count as
/// two columns.
///
/// # Example
///
/// ```rust
/// use tinct::display_width;
///
/// assert_eq!(display_width("\x1b[1m世界\x1b[0m"), 4);
/// ```
pub fn display_width(text: &str) -> usize {
    strip(text).width()
}

/// Centers each line of `text` within `width` columns.
///
/// Lines are split on `\n` and centered independently. Padding goes around
/// the original line, so any styling inside it is kept. Lines already at
/// least `width` wide are returned as-is, never truncated. When the padding
/// is odd, the extra space goes on the right.
///
/// # Example
///
/// ```rust
/// use tinct::center;
///
/// assert_eq!(center("ab", 6), "  ab  ");
/// assert_eq!(center("abc", 6), " abc  ");
/// assert_eq!(center("a\nbbb", 5), "  a  \n bbb ");
/// ```
pub fn center(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| center_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn center_line(line: &str, width: usize) -> String {
    let visible = visible_width(line);
    if visible >= width {
        return line.to_string();
    }

    let pad = width - visible;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}
