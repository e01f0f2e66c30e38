//! The styling front end: [`Color`] and the fluent [`Styled`] builder.

use std::sync::Arc;

use crate::codec;
use crate::output::OutputMode;
use crate::style::{StyleError, StyleRegistry, StyleValue};
use crate::tags::{TagParser, TagTransform};
use crate::theme::Theme;
use crate::util;

/// A configured styler.
///
/// `Color` owns the style registry (shared behind an `Arc`, so clones are
/// cheap), the output mode, and the force flag. All styling goes through it.
///
/// # Example
///
/// ```rust
/// use tinct::{Color, OutputMode};
///
/// let color = Color::with_mode(OutputMode::Term);
///
/// assert_eq!(color.apply("red", "foo").unwrap(), "\x1b[31mfoo\x1b[0m");
/// assert_eq!(
///     color.text("foo").style("white").style("bold").render().unwrap(),
///     "\x1b[1m\x1b[97mfoo\x1b[0m\x1b[0m",
/// );
/// assert_eq!(color.colorize("<red>foo</red>").unwrap(), color.apply("red", "foo").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Color {
    registry: Arc<StyleRegistry>,
    mode: OutputMode,
    force: bool,
}

impl Color {
    /// Creates a styler with built-in styles that asks the terminal whether
    /// styles are supported.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a styler with built-in styles and an explicit output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Creates a styler from a prebuilt registry.
    pub fn with_registry(registry: StyleRegistry, mode: OutputMode) -> Self {
        Self {
            registry: Arc::new(registry),
            mode,
            force: false,
        }
    }

    /// Returns the active registry.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    /// Installs user styles, replacing any previously installed ones.
    ///
    /// On error the current registry is left untouched.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidStyleName`] or [`StyleError::Recursion`]; see
    /// [`StyleRegistry::with_user_styles`].
    pub fn set_user_styles<I, K, V>(&mut self, styles: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        let registry = StyleRegistry::with_user_styles(styles.into_iter().map(|(name, value)| {
            let value: StyleValue = value.into();
            (name, value)
        }))?;
        self.registry = Arc::new(registry);
        Ok(())
    }

    /// Installs a theme's styles, replacing any previously installed ones.
    ///
    /// # Errors
    ///
    /// Same as [`Color::set_user_styles`].
    pub fn set_theme(&mut self, theme: &Theme) -> Result<(), StyleError> {
        self.registry = Arc::new(theme.to_registry()?);
        Ok(())
    }

    /// Forces styles on even when the output mode says they are unsupported.
    pub fn set_force_style(&mut self, force: bool) {
        self.force = force;
    }

    pub fn is_style_forced(&self) -> bool {
        self.force
    }

    /// Returns true if the output mode supports styles.
    pub fn is_supported(&self) -> bool {
        self.mode.should_use_color()
    }

    /// Returns true if styles will be emitted.
    pub fn is_enabled(&self) -> bool {
        self.force || self.is_supported()
    }

    /// Applies one style to `text`.
    ///
    /// When styles are disabled the text is returned unchanged and the name
    /// is not looked up.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidStyle`] for unknown names.
    pub fn apply(&self, name: &str, text: &str) -> Result<String, StyleError> {
        if !self.is_enabled() {
            return Ok(text.to_string());
        }
        Ok(codec::apply(&self.registry.resolve(name)?, text))
    }

    /// Applies styles in order, each wrapping the result of the previous.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidStyle`] for the first unknown name; no
    /// partial result is returned.
    pub fn apply_all<S: AsRef<str>>(&self, names: &[S], text: &str) -> Result<String, StyleError> {
        if !self.is_enabled() {
            return Ok(text.to_string());
        }
        let mut codes = Vec::new();
        for name in names {
            codes.extend(self.registry.resolve(name.as_ref())?);
        }
        Ok(codec::apply(&codes, text))
    }

    /// Applies a foreground color.
    pub fn fg(&self, color: &str, text: &str) -> Result<String, StyleError> {
        self.apply(color, text)
    }

    /// Applies a background color; `bg("red", ..)` is `bg_red`.
    pub fn bg(&self, color: &str, text: &str) -> Result<String, StyleError> {
        self.apply(&background(color), text)
    }

    /// Same as [`Color::bg`].
    pub fn highlight(&self, color: &str, text: &str) -> Result<String, StyleError> {
        self.bg(color, text)
    }

    /// Interprets inline style tags such as `<red>text</red>`.
    ///
    /// When styles are disabled the tags are removed and their bodies kept.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidStyle`] if a tag names an unknown style.
    pub fn colorize(&self, text: &str) -> Result<String, StyleError> {
        let transform = if self.is_enabled() {
            TagTransform::Apply
        } else {
            TagTransform::Remove
        };
        TagParser::new(&self.registry, transform).parse(text)
    }

    /// Removes all styling from `text`.
    pub fn clean(&self, text: &str) -> String {
        util::clean(text)
    }

    /// Same as [`Color::clean`].
    pub fn strip(&self, text: &str) -> String {
        util::clean(text)
    }

    /// Centers each line of `text` within `width` columns.
    pub fn center(&self, text: &str, width: usize) -> String {
        util::center(text, width)
    }

    /// Starts a fluent styling chain over `text`.
    pub fn text(&self, text: impl Into<String>) -> Styled<'_> {
        Styled {
            color: self,
            text: text.into(),
            steps: Vec::new(),
        }
    }
}

fn background(color: &str) -> String {
    format!("bg_{}", color)
}

/// One pending operation of a [`Styled`] chain.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Style(String),
    Center(usize),
    Clean,
    Colorize,
}

/// A piece of text with pending styling steps.
///
/// Steps run in the order they were added when [`Styled::render`] is called,
/// so styles added later wrap outermost and `center` / `clean` see everything
/// added before them.
///
/// # Example
///
/// ```rust
/// use tinct::{Color, OutputMode};
///
/// let color = Color::with_mode(OutputMode::Term);
///
/// let plain = color.text("foo").style("blue").reset().render().unwrap();
/// assert_eq!(plain, "foo");
///
/// let banner = color.text("hi").center(6).bg("blue").render().unwrap();
/// assert_eq!(banner, "\x1b[44m  hi  \x1b[0m");
/// ```
#[derive(Debug, Clone)]
#[must_use = "a Styled chain does nothing until rendered"]
pub struct Styled<'a> {
    color: &'a Color,
    text: String,
    steps: Vec<Step>,
}

impl<'a> Styled<'a> {
    /// Adds a style by name.
    pub fn style(mut self, name: &str) -> Self {
        self.steps.push(Step::Style(name.to_string()));
        self
    }

    /// Adds a foreground color.
    pub fn fg(self, color: &str) -> Self {
        self.style(color)
    }

    /// Adds a background color.
    pub fn bg(self, color: &str) -> Self {
        self.style(&background(color))
    }

    /// Same as [`Styled::bg`].
    pub fn highlight(self, color: &str) -> Self {
        self.bg(color)
    }

    /// Centers the text as styled so far.
    pub fn center(mut self, width: usize) -> Self {
        self.steps.push(Step::Center(width));
        self
    }

    /// Strips all styling applied so far.
    pub fn clean(mut self) -> Self {
        self.steps.push(Step::Clean);
        self
    }

    /// Same as [`Styled::clean`].
    pub fn reset(self) -> Self {
        self.clean()
    }

    /// Interprets inline style tags in the text as styled so far.
    pub fn colorize(mut self) -> Self {
        self.steps.push(Step::Colorize);
        self
    }

    /// Runs all steps and returns the resulting text.
    ///
    /// # Errors
    ///
    /// Returns the first [`StyleError`] met; nothing is returned partially.
    pub fn render(self) -> Result<String, StyleError> {
        let color = self.color;
        self.steps
            .into_iter()
            .try_fold(self.text, |text, step| match step {
                Step::Style(name) => color.apply(&name, &text),
                Step::Center(width) => Ok(color.center(&text, width)),
                Step::Clean => Ok(color.clean(&text)),
                Step::Colorize => color.colorize(&text),
            })
    }
}
