//! Style props and their resolution into style objects.
//!
//! This module provides the resolution pipeline:
//!
//! - [`StyleProps`]: The props bag a caller supplies per element
//! - [`Responsive`], [`PropValue`], [`Shorthand`], [`Scalar`]: Prop value shapes
//! - [`get_spacing_value`] and friends: Per-namespace value mappers
//! - [`get_base_box_styles`]: The full aggregation, base styles plus media queries
//! - [`StyleObject`]: The resolved output, serializable as CSS-in-JS or CSS text
//!
//! Resolution never fails. Unknown tokens fall through as literals and empty
//! values are omitted; errors only come from parsing props.

mod aggregate;
mod error;
mod object;
mod props;
mod resolve;
mod value;

pub use aggregate::{
    get_all_media_queries, get_all_props, get_base_box_styles, should_add_breakpoint,
    supported_properties, Platform,
};
pub use error::StyleError;
pub use object::{to_kebab_case, CssValue, StyleObject};
pub use props::{StyleProp, StyleProps, StyledProps};
pub use resolve::{
    get_border_radius_value, get_border_width_value, get_color_value, get_elevation_value,
    get_raw_value, get_spacing_value, resolve_token, SPACING_TOKEN_PREFIX,
};
pub use value::{get_responsive_value, PropValue, Responsive, Scalar, Shorthand, MAX_SHORTHAND_LEN};
