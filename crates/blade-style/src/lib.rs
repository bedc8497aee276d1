//! Design-system style resolution for web and native targets.
//!
//! `blade-style` turns a declarative bag of style props plus a theme into a
//! platform-appropriate style object. Prop values may be theme tokens
//! (`spacing.4`, `surface.border.normal.lowContrast`), literals (`"10px"`),
//! shorthand sequences (`["spacing.1", "auto"]`) or per-breakpoint maps.
//!
//! # Example
//!
//! ```rust
//! use blade_style::style::{get_base_box_styles, Platform, StyleProps};
//! use blade_style::Theme;
//!
//! let props: StyleProps = serde_json::from_str(
//!     r#"{ "display": "flex", "padding": { "base": "spacing.2", "l": "spacing.5" } }"#,
//! )
//! .unwrap();
//!
//! let styles = get_base_box_styles(&props, Theme::light(), Platform::Web);
//! assert_eq!(
//!     serde_json::to_string(&styles).unwrap(),
//!     r#"{"display":"flex","padding":"4px","@media screen and (min-width: 1024px)":{"padding":"16px"}}"#
//! );
//! ```
//!
//! # Modules
//!
//! - [`tokens`]: Breakpoints and unit helpers shared by every theme
//! - [`theme`]: Token trees, loading from JSON/YAML, light/dark selection
//! - [`style`]: Props, value mappers, and the style aggregator
//! - [`components`]: Style computations for Icon, Tag, and Amount

pub mod components;
pub mod style;
pub mod theme;
pub mod tokens;

pub use style::{
    get_base_box_styles, Platform, PropValue, Responsive, StyleError, StyleObject, StyleProp,
    StyleProps,
};
pub use theme::{AdaptiveTheme, ColorScheme, Theme, ThemeChoice, ThemeError};
pub use tokens::Breakpoint;
