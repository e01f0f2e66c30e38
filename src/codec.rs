//! ANSI SGR encoding and stripping.
//!
//! Every wrap is self-terminated: applying `A` then `B` to `T` gives
//! `ESC[B m ESC[A m T ESC[0m ESC[0m`. Codes are never merged into a single
//! sequence, and resets are never shared.

use crate::style::SgrCode;

/// The escape sequence that closes every wrap.
pub const RESET: &str = "\x1b[0m";

/// Wraps `text` in a single SGR code and a reset.
///
/// # Example
///
/// ```rust
/// use tinct::{codec, SgrCode};
///
/// assert_eq!(codec::wrap(SgrCode::Plain(31), "foo"), "\x1b[31mfoo\x1b[0m");
/// assert_eq!(codec::wrap(SgrCode::Fg256(3), "foo"), "\x1b[38;5;3mfoo\x1b[0m");
/// ```
pub fn wrap(code: SgrCode, text: &str) -> String {
    format!("\x1b[{}m{}{}", code, text, RESET)
}

/// Applies codes in order, each one wrapping the result of the previous.
pub fn apply(codes: &[SgrCode], text: &str) -> String {
    let mut output = opening(codes);
    output.push_str(text);
    output.push_str(&closing(codes));
    output
}

/// Returns the escape sequences that [`apply`] puts before the text: the
/// last code first, since it wraps outermost.
pub fn opening(codes: &[SgrCode]) -> String {
    codes
        .iter()
        .rev()
        .map(|code| format!("\x1b[{}m", code))
        .collect()
}

/// Returns the resets that [`apply`] puts after the text, one per code.
pub fn closing(codes: &[SgrCode]) -> String {
    RESET.repeat(codes.len())
}

/// Removes every SGR escape sequence, leaving all other text untouched.
///
/// Stripping plain text is a no-op.
///
/// # Example
///
/// ```rust
/// use tinct::codec;
///
/// assert_eq!(codec::strip("\x1b[1m\x1b[97mfoo\x1b[0m\x1b[0m"), "foo");
/// assert_eq!(codec::strip("plain ✩"), "plain ✩");
/// ```
pub fn strip(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    // Output offsets of `ESC[` runs that a later `m` may still close. Closing
    // one can complete an outer run, as in "\x1b[\x1b[0m1m".
    let mut open: Vec<usize> = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\x1b' if chars.peek() == Some(&'[') => {
                chars.next();
                open.push(stripped.len());
                stripped.push_str("\x1b[");
            }
            '0'..='9' | ';' => stripped.push(c),
            'm' => match open.pop() {
                Some(start) => stripped.truncate(start),
                None => stripped.push(c),
            },
            _ => {
                open.clear();
                stripped.push(c);
            }
        }
    }

    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_plain() {
        assert_eq!(wrap(SgrCode::Plain(1), "x"), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_wrap_palette() {
        assert_eq!(wrap(SgrCode::Bg256(3), "foo"), "\x1b[48;5;3mfoo\x1b[0m");
    }

    #[test]
    fn test_apply_nests_in_order() {
        let output = apply(&[SgrCode::Plain(97), SgrCode::Plain(1)], "foo");
        assert_eq!(output, "\x1b[1m\x1b[97mfoo\x1b[0m\x1b[0m");
    }

    #[test]
    fn test_apply_no_codes() {
        assert_eq!(apply(&[], "foo"), "foo");
    }

    #[test]
    fn test_apply_is_order_sensitive() {
        let ab = apply(&[SgrCode::Plain(31), SgrCode::Plain(1)], "X");
        let ba = apply(&[SgrCode::Plain(1), SgrCode::Plain(31)], "X");
        assert_ne!(ab, ba);
        assert_eq!(ab.matches(RESET).count(), 2);
    }

    #[test]
    fn test_strip_removes_nested_sequences() {
        let styled = apply(&[SgrCode::Fg256(200), SgrCode::Plain(4)], "some text");
        assert_eq!(strip(&styled), "some text");
    }

    #[test]
    fn test_strip_keeps_multibyte() {
        let styled = wrap(SgrCode::Plain(31), "héllo ✩ 世界");
        assert_eq!(strip(&styled), "héllo ✩ 世界");
    }

    #[test]
    fn test_strip_leaves_other_escapes() {
        // Cursor movement is not SGR.
        assert_eq!(strip("\x1b[2Jfoo"), "\x1b[2Jfoo");
    }

    #[test]
    fn test_strip_spliced_sequence() {
        let spliced = "a\x1b[\x1b[0m1mb";
        assert_eq!(strip(spliced), "ab");
        assert_eq!(strip(&strip(spliced)), strip(spliced));
    }

    #[test]
    fn test_strip_deeply_spliced_sequence() {
        let n = 200_000;
        let spliced = format!("{}0m{}", "\x1b[".repeat(n), "1m".repeat(n));
        // The last `1m` has no open sequence left to close.
        assert_eq!(strip(&spliced), "1m");
    }

    #[test]
    fn test_strip_unclosed_sequence_is_kept() {
        assert_eq!(strip("a\x1b[12"), "a\x1b[12");
        assert_eq!(strip("a\x1b[1;2m\x1b[3"), "a\x1b[3");
    }

    #[test]
    fn test_strip_lone_m_is_text() {
        assert_eq!(strip("mm\x1b[0mm"), "mmm");
    }

    #[test]
    fn test_opening_and_closing_bracket_apply() {
        let codes = [SgrCode::Plain(97), SgrCode::Bg256(4)];
        assert_eq!(opening(&codes), "\x1b[48;5;4m\x1b[97m");
        assert_eq!(closing(&codes), "\x1b[0m\x1b[0m");
        assert_eq!(
            apply(&codes, "x"),
            wrap(SgrCode::Bg256(4), &wrap(SgrCode::Plain(97), "x"))
        );
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip(""), "");
    }
}
