//! Theme selection at resolution time.

use super::adaptive::{AdaptiveTheme, ColorScheme};
use super::theme::Theme;

/// Reference to either a fixed theme or an adaptive light/dark pair.
#[derive(Debug, Clone, Copy)]
pub enum ThemeChoice<'a> {
    /// A theme that ignores the color scheme.
    Theme(&'a Theme),
    /// A light/dark pair chosen by the detected color scheme.
    Adaptive(&'a AdaptiveTheme),
    /// A light/dark pair with the scheme fixed by the caller.
    Scheme(&'a AdaptiveTheme, ColorScheme),
}

impl<'a> ThemeChoice<'a> {
    /// Resolves to a concrete theme without cloning it.
    pub fn resolve(&self) -> &'a Theme {
        match *self {
            ThemeChoice::Theme(theme) => theme,
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
            ThemeChoice::Scheme(adaptive, scheme) => adaptive.for_scheme(scheme),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
