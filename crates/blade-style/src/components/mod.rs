//! Style computations for individual design-system components.
//!
//! - [`icon_styles`]: Icon size and color
//! - [`tag_styles`]: Tag container, label color and icon
//! - [`format_amount`]: Currency amount text

mod amount;
mod icon;
mod tag;

pub use amount::{format_amount, AmountIntent, AmountSuffix, Currency, FormattedAmount};
pub use icon::{icon_styles, IconName, IconSize, IconStyles};
pub use tag::{tag_styles, TagProps, TagSize, TagStyles};
