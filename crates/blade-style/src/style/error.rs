//! Style prop validation errors.

use thiserror::Error;

/// Error returned when style props are malformed.
///
/// Resolution itself never fails; these errors come from building or
/// deserializing props.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// A shorthand sequence holds more than four entries.
    #[error("shorthand accepts at most 4 values, got {0}")]
    ShorthandTooLong(usize),

    /// A prop name is not part of the supported schema.
    #[error("unknown style prop '{0}'")]
    UnknownProp(String),

    /// A responsive map is keyed by an unknown breakpoint.
    #[error("unknown breakpoint '{0}' (expected one of base, xs, s, m, l, xl)")]
    UnknownBreakpoint(String),

    /// An icon name is not part of the icon set.
    #[error("unknown icon '{0}'")]
    UnknownIcon(String),

    /// An amount is NaN or infinite.
    #[error("amount must be a finite number, got {0}")]
    NonFiniteAmount(f64),
}
