//! Adaptive themes that respond to the system color scheme.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// The user's preferred color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Light => f.write_str("light"),
            ColorScheme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(format!("unknown color scheme '{}'", other)),
        }
    }
}

/// A pair of themes selected by color scheme.
///
/// # Example
///
/// ```rust
/// use blade_style::{AdaptiveTheme, ColorScheme, Theme};
///
/// let adaptive = AdaptiveTheme::new(Theme::light().clone(), Theme::dark().clone());
/// assert_eq!(adaptive.for_scheme(ColorScheme::Dark).name(), "dark");
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// The built-in light/dark pair.
    pub fn builtin() -> Self {
        Self::new(Theme::light().clone(), Theme::dark().clone())
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Resolves to the variant matching the detected color scheme.
    pub fn resolve(&self) -> &Theme {
        self.for_scheme(detect_color_scheme())
    }
}

type ColorSchemeDetector = fn() -> ColorScheme;

static COLOR_SCHEME_DETECTOR: Lazy<Mutex<ColorSchemeDetector>> =
    Lazy::new(|| Mutex::new(os_color_scheme_detector));

/// Overrides the detector used to decide between light and dark themes.
///
/// Useful in tests or when the host application already knows the scheme.
pub fn set_color_scheme_detector(detector: ColorSchemeDetector) {
    let mut guard = COLOR_SCHEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores OS-based color scheme detection.
pub fn reset_color_scheme_detector() {
    set_color_scheme_detector(os_color_scheme_detector);
}

pub fn detect_color_scheme() -> ColorScheme {
    let detector = COLOR_SCHEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_color_scheme_detector() -> ColorScheme {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorScheme::Dark,
        OsThemeMode::Light => ColorScheme::Light,
    }
}
