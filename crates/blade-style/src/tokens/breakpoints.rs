//! Viewport breakpoints and media-query construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::StyleError;

/// A named viewport-width threshold.
///
/// Variants are ordered by their minimum width, so a `BTreeMap` keyed by
/// `Breakpoint` iterates from the smallest screen to the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Base,
    Xs,
    S,
    M,
    L,
    Xl,
}

impl Breakpoint {
    /// Every breakpoint, smallest first.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Xs,
        Breakpoint::S,
        Breakpoint::M,
        Breakpoint::L,
        Breakpoint::Xl,
    ];

    /// Minimum viewport width in pixels at which this breakpoint applies.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Xs => 320,
            Breakpoint::S => 480,
            Breakpoint::M => 768,
            Breakpoint::L => 1024,
            Breakpoint::Xl => 1200,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Base => "base",
            Breakpoint::Xs => "xs",
            Breakpoint::S => "s",
            Breakpoint::M => "m",
            Breakpoint::L => "l",
            Breakpoint::Xl => "xl",
        }
    }

    pub fn is_base(self) -> bool {
        self == Breakpoint::Base
    }

    /// Breakpoints that get their own media-query block.
    pub fn without_base() -> impl Iterator<Item = Breakpoint> {
        Self::ALL.into_iter().filter(|bp| !bp.is_base())
    }

    /// The `@media` key under which this breakpoint's styles are nested.
    pub fn media_query_key(self) -> String {
        format!("@media {}", get_media_query(Some(self.min_width()), None))
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| StyleError::UnknownBreakpoint(s.to_string()))
    }
}

/// Builds a screen media query for an optional width range.
///
/// ```rust
/// use blade_style::tokens::get_media_query;
///
/// assert_eq!(get_media_query(Some(768), None), "screen and (min-width: 768px)");
/// assert_eq!(
///     get_media_query(Some(320), Some(479)),
///     "screen and (min-width: 320px) and (max-width: 479px)"
/// );
/// ```
pub fn get_media_query(min: Option<u32>, max: Option<u32>) -> String {
    let mut query = String::from("screen");
    if let Some(min) = min {
        query.push_str(&format!(" and (min-width: {}px)", min));
    }
    if let Some(max) = max {
        query.push_str(&format!(" and (max-width: {}px)", max));
    }
    query
}
