//! Theme system: token trees and their selection.
//!
//! This module provides:
//!
//! - [`Theme`]: A named tree of design tokens addressed by dotted paths
//! - [`AdaptiveTheme`]: Light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: Reference type for selecting a theme at resolution time
//! - [`ColorScheme`]: Light or dark color scheme enum
//! - [`ThemeError`]: Errors from loading or validating a theme
//!
//! Themes are plain data. They are loaded once (from JSON, YAML, or the
//! built-in token files) and then only read by the style resolvers.

mod adaptive;
mod choice;
mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{
    detect_color_scheme, reset_color_scheme_detector, set_color_scheme_detector, AdaptiveTheme,
    ColorScheme,
};
pub use choice::ThemeChoice;
pub use error::ThemeError;
pub use theme::{Theme, REQUIRED_NAMESPACES};
