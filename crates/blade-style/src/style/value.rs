//! Prop value types: scalars, shorthands, and responsive wrappers.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use super::error::StyleError;
use crate::tokens::Breakpoint;

/// Maximum number of entries in a [`Shorthand`].
pub const MAX_SHORTHAND_LEN: usize = 4;

/// A single primitive value: a number or a string.
///
/// The empty string is the only empty-equivalent scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Number(_) => None,
        }
    }

    /// Converts a theme token value into a scalar, if it is one.
    pub fn from_token(value: &Value) -> Option<Scalar> {
        match value {
            Value::Number(n) => Some(Scalar::Number(n.clone())),
            Value::String(s) if !s.is_empty() => Some(Scalar::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<f64> for Scalar {
    /// Non-finite numbers have no JSON representation and become empty.
    fn from(n: f64) -> Self {
        Number::from_f64(n)
            .map(Scalar::Number)
            .unwrap_or_else(|| Scalar::Text(String::new()))
    }
}

/// An ordered sequence of one to four scalars, e.g. four-sided spacing.
///
/// ```rust
/// use blade_style::style::Shorthand;
///
/// let margin = Shorthand::new(["spacing.1", "spacing.2"]).unwrap();
/// assert_eq!(margin.len(), 2);
/// assert!(Shorthand::new(["a", "b", "c", "d", "e"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Scalar>", into = "Vec<Scalar>")]
pub struct Shorthand(Vec<Scalar>);

impl Shorthand {
    pub fn new<I, S>(values: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        Self::try_from(values.into_iter().map(Into::into).collect::<Vec<_>>())
    }

    pub fn values(&self) -> &[Scalar] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the sequence has no non-empty entry.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Scalar::is_empty)
    }
}

impl TryFrom<Vec<Scalar>> for Shorthand {
    type Error = StyleError;

    fn try_from(values: Vec<Scalar>) -> Result<Self, Self::Error> {
        if values.len() > MAX_SHORTHAND_LEN {
            return Err(StyleError::ShorthandTooLong(values.len()));
        }
        Ok(Shorthand(values))
    }
}

impl From<Shorthand> for Vec<Scalar> {
    fn from(shorthand: Shorthand) -> Self {
        shorthand.0
    }
}

/// The value of one style prop at one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Scalar(Scalar),
    Shorthand(Shorthand),
}

impl PropValue {
    pub fn is_empty(&self) -> bool {
        match self {
            PropValue::Scalar(s) => s.is_empty(),
            PropValue::Shorthand(s) => s.is_empty(),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            PropValue::Scalar(s) => Some(s),
            PropValue::Shorthand(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => {
                let values: Vec<Scalar> = items
                    .into_iter()
                    .map(|item| Scalar::deserialize(item).map_err(D::Error::custom))
                    .collect::<Result<_, _>>()?;
                Shorthand::try_from(values)
                    .map(PropValue::Shorthand)
                    .map_err(D::Error::custom)
            }
            Value::Number(n) => Ok(PropValue::Scalar(Scalar::Number(n))),
            Value::String(s) => Ok(PropValue::Scalar(Scalar::Text(s))),
            other => Err(D::Error::custom(format!(
                "expected a string, number or list of at most {} values, got {}",
                MAX_SHORTHAND_LEN, other
            ))),
        }
    }
}

impl From<Scalar> for PropValue {
    fn from(value: Scalar) -> Self {
        PropValue::Scalar(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Scalar(value.into())
    }
}

impl From<Shorthand> for PropValue {
    fn from(shorthand: Shorthand) -> Self {
        PropValue::Shorthand(shorthand)
    }
}

/// A value that is either fixed or varies per [`Breakpoint`].
///
/// ```rust
/// use blade_style::style::{PropValue, Responsive};
/// use blade_style::tokens::Breakpoint;
///
/// let padding: Responsive<PropValue> = Responsive::from_breakpoints([
///     (Breakpoint::Base, "spacing.2".into()),
///     (Breakpoint::M, "spacing.4".into()),
/// ]);
/// assert_eq!(padding.at(Some(Breakpoint::M)), Some(&"spacing.4".into()));
/// assert_eq!(padding.at(Some(Breakpoint::L)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    Value(T),
    Breakpoints(BTreeMap<Breakpoint, T>),
}

impl<T> Responsive<T> {
    pub fn from_breakpoints(entries: impl IntoIterator<Item = (Breakpoint, T)>) -> Self {
        Responsive::Breakpoints(entries.into_iter().collect())
    }

    /// The value applicable at `breakpoint`.
    ///
    /// With no breakpoint (or `base`), a plain value is returned as is and a
    /// breakpoint map yields its `base` entry. For any other breakpoint only
    /// an explicit map entry is returned, so plain values are never repeated
    /// in breakpoint-specific styles.
    pub fn at(&self, breakpoint: Option<Breakpoint>) -> Option<&T> {
        match self {
            Responsive::Breakpoints(map) => map.get(&breakpoint.unwrap_or(Breakpoint::Base)),
            Responsive::Value(value) => match breakpoint {
                None | Some(Breakpoint::Base) => Some(value),
                Some(_) => None,
            },
        }
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, Responsive::Breakpoints(_))
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Responsive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(entries) => {
                let mut map = BTreeMap::new();
                for (key, value) in entries {
                    let breakpoint = key.parse::<Breakpoint>().map_err(D::Error::custom)?;
                    if value.is_null() {
                        continue;
                    }
                    map.insert(breakpoint, T::deserialize(value).map_err(D::Error::custom)?);
                }
                Ok(Responsive::Breakpoints(map))
            }
            other => T::deserialize(other)
                .map(Responsive::Value)
                .map_err(D::Error::custom),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Value(value)
    }
}

impl From<&str> for Responsive<PropValue> {
    fn from(value: &str) -> Self {
        Responsive::Value(value.into())
    }
}

impl From<String> for Responsive<PropValue> {
    fn from(value: String) -> Self {
        Responsive::Value(value.into())
    }
}

impl From<i64> for Responsive<PropValue> {
    fn from(value: i64) -> Self {
        Responsive::Value(value.into())
    }
}

impl From<i32> for Responsive<PropValue> {
    fn from(value: i32) -> Self {
        Responsive::Value(value.into())
    }
}

impl From<f64> for Responsive<PropValue> {
    fn from(value: f64) -> Self {
        Responsive::Value(value.into())
    }
}

impl From<Shorthand> for Responsive<PropValue> {
    fn from(value: Shorthand) -> Self {
        Responsive::Value(value.into())
    }
}

/// Returns the value applicable at `breakpoint`; see [`Responsive::at`].
pub fn get_responsive_value<T>(
    value: Option<&Responsive<T>>,
    breakpoint: Option<Breakpoint>,
) -> Option<&T> {
    value?.at(breakpoint)
}
