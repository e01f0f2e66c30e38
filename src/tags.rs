//! Inline style tags.
//!
//! Markup looks like `<red>text <bold>more</bold></red>`: a tag names any
//! style the registry knows, and tags nest, so nested tags produce nested
//! wraps.
//!
//! # Grammar
//!
//! ```text
//! Document := (Text | Tag)*
//! Tag      := "<" Name ">" Document "</" Name ">"
//! Name     := [A-Za-z0-9_\[\]-]+
//! ```
//!
//! A close tag matches the nearest open tag of the same name, compared
//! case-insensitively, so a same-named tag nested inside does not end the
//! outer one early. Markup that does not close is kept as literal text;
//! parsing never fails on malformed input.

use std::collections::HashMap;

use crate::codec;
use crate::style::{SgrCode, StyleError, StyleRegistry};

/// What to do with recognized tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTransform {
    /// Replace tags with the escape codes of their style.
    Apply,
    /// Drop the tags and keep their bodies.
    Remove,
    /// Leave the markup untouched.
    Keep,
}

/// Parser for inline style tags.
///
/// Parsing is a single left-to-right pass with an explicit stack of open
/// tags, so nesting depth is bounded only by memory.
///
/// # Example
///
/// ```rust
/// use tinct::{StyleRegistry, TagParser, TagTransform};
///
/// let registry = StyleRegistry::new();
///
/// let parser = TagParser::new(&registry, TagTransform::Apply);
/// assert_eq!(
///     parser.parse("before <red>text</red>").unwrap(),
///     "before \x1b[31mtext\x1b[0m",
/// );
///
/// let parser = TagParser::new(&registry, TagTransform::Remove);
/// assert_eq!(parser.parse("before <red>text</red>").unwrap(), "before text");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TagParser<'a> {
    registry: &'a StyleRegistry,
    transform: TagTransform,
}

impl<'a> TagParser<'a> {
    pub fn new(registry: &'a StyleRegistry, transform: TagTransform) -> Self {
        Self {
            registry,
            transform,
        }
    }

    /// Parses `input`, transforming every well-formed tag.
    ///
    /// A close tag ends the innermost open tag with the same name. Tags
    /// opened inside it that never closed are kept as literal text, as are
    /// open tags left at the end of input and close tags with nothing to
    /// close.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidStyle`] if a tag names an unknown style
    /// and the transform is [`TagTransform::Apply`].
    pub fn parse(&self, input: &str) -> Result<String, StyleError> {
        if self.transform == TagTransform::Keep {
            return Ok(input.to_string());
        }

        let mut state = ParseState::default();
        let mut text_start = 0;
        let mut cursor = 0;

        while let Some(offset) = input[cursor..].find('<') {
            let start = cursor + offset;
            let Some(tag) = tag_at(input, start) else {
                cursor = start + 1;
                continue;
            };

            state.pieces.push(Piece::Text(&input[text_start..start]));
            text_start = tag.end;
            cursor = tag.end;

            if tag.closing {
                self.close(&mut state, input, tag)?;
            } else {
                state.open(tag);
            }
        }

        state.pieces.push(Piece::Text(&input[text_start..]));
        while let Some(frame) = state.frames.pop() {
            state.abandon(input, frame);
        }

        Ok(state.pieces.iter().map(Piece::as_str).collect())
    }

    fn close<'s>(
        &self,
        state: &mut ParseState<'s>,
        input: &'s str,
        tag: TagSpan<'s>,
    ) -> Result<(), StyleError> {
        let key = tag.name.to_ascii_lowercase();
        let Some(&index) = state.open_by_name.get(&key).and_then(|frames| frames.last()) else {
            log::trace!("stray close tag </{}>, keeping it as text", tag.name);
            state.pieces.push(Piece::Text(&input[tag.start..tag.end]));
            return Ok(());
        };

        while state.frames.len() > index + 1 {
            if let Some(inner) = state.frames.pop() {
                state.abandon(input, inner);
            }
        }

        if let Some(frame) = state.frames.pop() {
            state.forget(&frame);
            let codes = self.codes(frame.tag.name)?;
            state.pieces[frame.slot] = Piece::Owned(codec::opening(&codes));
            state.pieces.push(Piece::Owned(codec::closing(&codes)));
        }
        Ok(())
    }

    fn codes(&self, name: &str) -> Result<Vec<SgrCode>, StyleError> {
        match self.transform {
            TagTransform::Apply => self.registry.resolve(name),
            TagTransform::Remove | TagTransform::Keep => Ok(Vec::new()),
        }
    }
}

/// A piece of the output, concatenated once parsing ends.
#[derive(Debug)]
enum Piece<'s> {
    Text(&'s str),
    Owned(String),
    /// Filled in when the tag opened here is closed or abandoned.
    Pending,
}

impl Piece<'_> {
    fn as_str(&self) -> &str {
        match self {
            Piece::Text(text) => text,
            Piece::Owned(text) => text,
            Piece::Pending => "",
        }
    }
}

/// An open tag waiting for its close.
#[derive(Debug, Clone, Copy)]
struct Frame<'s> {
    tag: TagSpan<'s>,
    /// Index of the opening piece in `ParseState::pieces`.
    slot: usize,
}

#[derive(Debug, Default)]
struct ParseState<'s> {
    pieces: Vec<Piece<'s>>,
    frames: Vec<Frame<'s>>,
    /// Lowercase tag name to indices into `frames`, innermost last.
    open_by_name: HashMap<String, Vec<usize>>,
}

impl<'s> ParseState<'s> {
    fn open(&mut self, tag: TagSpan<'s>) {
        self.open_by_name
            .entry(tag.name.to_ascii_lowercase())
            .or_default()
            .push(self.frames.len());
        self.frames.push(Frame {
            tag,
            slot: self.pieces.len(),
        });
        self.pieces.push(Piece::Pending);
    }

    /// Turns an unclosed tag back into the literal text it came from.
    fn abandon(&mut self, input: &'s str, frame: Frame<'s>) {
        log::trace!("unterminated tag <{}>, keeping it as text", frame.tag.name);
        self.forget(&frame);
        self.pieces[frame.slot] = Piece::Text(&input[frame.tag.start..frame.tag.end]);
    }

    fn forget(&mut self, frame: &Frame<'s>) {
        if let Some(frames) = self.open_by_name.get_mut(&frame.tag.name.to_ascii_lowercase()) {
            frames.pop();
        }
    }
}

/// Byte span of a tag within its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TagSpan<'s> {
    start: usize,
    end: usize,
    name: &'s str,
    closing: bool,
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'[' | b']' | b'-')
}

/// Reads `Name ">"` starting at `pos`, returning the name and the index just
/// past the `>`.
fn name_at(input: &str, pos: usize) -> Option<(&str, usize)> {
    let bytes = input.as_bytes();
    let len = bytes
        .get(pos..)?
        .iter()
        .take_while(|b| is_name_byte(**b))
        .count();

    if len == 0 || bytes.get(pos + len) != Some(&b'>') {
        return None;
    }
    Some((&input[pos..pos + len], pos + len + 1))
}

/// Reads an open or close tag whose `<` is at `start`.
fn tag_at(input: &str, start: usize) -> Option<TagSpan<'_>> {
    let closing = input.as_bytes().get(start + 1) == Some(&b'/');
    let name_start = if closing { start + 2 } else { start + 1 };
    let (name, end) = name_at(input, name_start)?;
    Some(TagSpan {
        start,
        end,
        name,
        closing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::wrap;
    use crate::style::{SgrCode, StyleValue};

    fn apply(input: &str) -> Result<String, StyleError> {
        let registry = StyleRegistry::new();
        TagParser::new(&registry, TagTransform::Apply).parse(input)
    }

    fn red(text: &str) -> String {
        wrap(SgrCode::Plain(31), text)
    }

    fn bold(text: &str) -> String {
        wrap(SgrCode::Plain(1), text)
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(apply("no tags here").unwrap(), "no tags here");
        assert_eq!(apply("").unwrap(), "");
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(apply("<red>X</red>").unwrap(), red("X"));
    }

    #[test]
    fn test_text_around_tag() {
        assert_eq!(
            apply("before <red>some text</red> after").unwrap(),
            format!("before {} after", red("some text"))
        );
    }

    #[test]
    fn test_nested_tags() {
        let expected = wrap(SgrCode::Plain(36), &format!("Hello {}", bold("World!")));
        assert_eq!(apply("<cyan>Hello <bold>World!</bold></cyan>").unwrap(), expected);
    }

    #[test]
    fn test_siblings() {
        assert_eq!(
            apply("<red>a</red> and <bold>b</bold>").unwrap(),
            format!("{} and {}", red("a"), bold("b"))
        );
    }

    #[test]
    fn test_same_name_nesting_is_balanced() {
        assert_eq!(
            apply("<red>a <red>b</red> c</red>").unwrap(),
            red(&format!("a {} c", red("b")))
        );
    }

    #[test]
    fn test_tag_names_are_case_insensitive() {
        assert_eq!(apply("<RED>X</red>").unwrap(), red("X"));
    }

    #[test]
    fn test_palette_tag() {
        assert_eq!(
            apply("<color[3]>foo</color[3]>").unwrap(),
            "\x1b[38;5;3mfoo\x1b[0m"
        );
    }

    #[test]
    fn test_unknown_tag_errors() {
        assert_eq!(
            apply("<nope>X</nope>"),
            Err(StyleError::InvalidStyle("nope".to_string()))
        );
        assert_eq!(
            apply("<color[256]>X</color[256]>"),
            Err(StyleError::InvalidStyle("color[256]".to_string()))
        );
    }

    #[test]
    fn test_unknown_nested_tag_errors() {
        assert!(apply("<red>a <nope>b</nope></red>").is_err());
    }

    #[test]
    fn test_unterminated_tag_is_literal() {
        assert_eq!(apply("<red>unfinished").unwrap(), "<red>unfinished");
    }

    #[test]
    fn test_unterminated_outer_still_parses_inner() {
        assert_eq!(
            apply("<red>a <bold>b</bold>").unwrap(),
            format!("<red>a {}", bold("b"))
        );
    }

    #[test]
    fn test_stray_close_tag_is_literal() {
        assert_eq!(apply("text</bold>").unwrap(), "text</bold>");
    }

    #[test]
    fn test_non_tag_angles_are_literal() {
        assert_eq!(apply("a < b > c <> d").unwrap(), "a < b > c <> d");
        assert_eq!(apply("1 <2").unwrap(), "1 <2");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(apply("✩ <red>世界</red> ✩").unwrap(), format!("✩ {} ✩", red("世界")));
    }

    #[test]
    fn test_user_style_tag() {
        let registry =
            StyleRegistry::with_user_styles([("error", StyleValue::from(["red", "bold"]))]).unwrap();
        let parser = TagParser::new(&registry, TagTransform::Apply);
        assert_eq!(parser.parse("<error>boom</error>").unwrap(), bold(&red("boom")));
    }

    #[test]
    fn test_remove_drops_tags() {
        let registry = StyleRegistry::new();
        let parser = TagParser::new(&registry, TagTransform::Remove);
        assert_eq!(
            parser.parse("<cyan>Hello <bold>World!</bold></cyan>").unwrap(),
            "Hello World!"
        );
        // Names are not resolved when nothing is applied.
        assert_eq!(parser.parse("<nope>x</nope>").unwrap(), "x");
    }

    #[test]
    fn test_interleaved_close_abandons_inner() {
        assert_eq!(
            apply("<red>a<bold>b</red>c</bold>").unwrap(),
            format!("{}c</bold>", red("a<bold>b"))
        );
    }

    #[test]
    fn test_unterminated_same_name_inside() {
        assert_eq!(apply("<red><red>x</red>").unwrap(), format!("<red>{}", red("x")));
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 100_000;
        let input = format!("{}x{}", "<red>".repeat(depth), "</red>".repeat(depth));
        let expected = format!("{}x{}", "\x1b[31m".repeat(depth), codec::RESET.repeat(depth));
        assert_eq!(apply(&input).unwrap(), expected);

        let registry = StyleRegistry::new();
        let parser = TagParser::new(&registry, TagTransform::Remove);
        assert_eq!(parser.parse(&input).unwrap(), "x");
    }

    #[test]
    fn test_deep_unterminated_nesting_is_literal() {
        let input = "<red>".repeat(100_000);
        assert_eq!(apply(&input).unwrap(), input);
    }

    #[test]
    fn test_large_unterminated_markup() {
        let input = "<red>a".repeat(50_000);
        assert_eq!(apply(&input).unwrap(), input);

        // One close at the end wraps only the innermost open tag.
        let closed = format!("{}</red>", input);
        let head = "<red>a".repeat(49_999);
        assert_eq!(apply(&closed).unwrap(), format!("{}{}", head, red("a")));
    }

    #[test]
    fn test_many_stray_close_tags() {
        let input = "x</red>".repeat(50_000);
        assert_eq!(apply(&input).unwrap(), input);
    }

    #[test]
    fn test_keep_returns_markup() {
        let registry = StyleRegistry::new();
        let parser = TagParser::new(&registry, TagTransform::Keep);
        let input = "<red>hello</red> <bold>world</bold>";
        assert_eq!(parser.parse(input).unwrap(), input);
    }
}
