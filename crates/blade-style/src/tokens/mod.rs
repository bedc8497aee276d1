//! Global design tokens that do not vary per theme.
//!
//! - [`Breakpoint`]: the named viewport widths responsive props are keyed by
//! - [`get_media_query`]: builds the media query for a width range
//! - [`make_space`], [`make_border_size`], [`make_size`]: raw token values to CSS lengths

mod breakpoints;
mod units;

pub use breakpoints::{get_media_query, Breakpoint};
pub use units::{make_border_size, make_size, make_space};
