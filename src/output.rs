//! Output mode control.

/// Controls whether styles are emitted.
///
/// `Auto` asks the terminal (via [`console::colors_enabled`]); the other two
/// modes pin the answer, which is what tests and piped output want.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Emit escape codes only if stdout supports colors.
    #[default]
    Auto,
    /// Always emit escape codes.
    Term,
    /// Never emit escape codes.
    Text,
}

impl OutputMode {
    /// Returns true if styles should be applied in this mode.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}
