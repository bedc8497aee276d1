//! Resolved style objects and their CSS text rendering.

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Scalar;

/// One entry of a [`StyleObject`]: a concrete value or a nested block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Value(Scalar),
    Block(StyleObject),
}

/// A resolved, insertion-ordered style description.
///
/// Keys are camelCase CSS property names (`paddingTop`), except for nested
/// blocks which are keyed by their `@media` query. Serializing to JSON gives
/// the CSS-in-JS shape web and native style engines consume.
///
/// # Example
///
/// ```rust
/// use blade_style::style::{Scalar, StyleObject};
///
/// let mut styles = StyleObject::new();
/// styles.set("paddingTop", Some(Scalar::from("12px")));
/// styles.set("margin", None);
///
/// assert_eq!(styles.len(), 1);
/// assert_eq!(styles.to_css_declarations(), "padding-top: 12px;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject(IndexMap<String, CssValue>);

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property if the value is present and non-empty.
    pub fn set(&mut self, property: &str, value: Option<Scalar>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.insert(property.to_string(), CssValue::Value(value));
        }
    }

    /// Nests a block under `key` unless it is empty.
    pub fn set_block(&mut self, key: impl Into<String>, block: StyleObject) {
        if !block.is_empty() {
            self.0.insert(key.into(), CssValue::Block(block));
        }
    }

    pub fn get(&self, key: &str) -> Option<&CssValue> {
        self.0.get(key)
    }

    /// The concrete value of a top-level property.
    pub fn value(&self, property: &str) -> Option<&Scalar> {
        match self.0.get(property)? {
            CssValue::Value(value) => Some(value),
            CssValue::Block(_) => None,
        }
    }

    /// The nested block stored under `key`.
    pub fn block(&self, key: &str) -> Option<&StyleObject> {
        match self.0.get(key)? {
            CssValue::Block(block) => Some(block),
            CssValue::Value(_) => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Top-level declarations, skipping nested blocks.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.0.iter().filter_map(|(k, v)| match v {
            CssValue::Value(value) => Some((k.as_str(), value)),
            CssValue::Block(_) => None,
        })
    }

    /// Nested blocks in insertion order.
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &StyleObject)> {
        self.0.iter().filter_map(|(k, v)| match v {
            CssValue::Block(block) => Some((k.as_str(), block)),
            CssValue::Value(_) => None,
        })
    }

    pub fn has_blocks(&self) -> bool {
        self.blocks().next().is_some()
    }

    /// Adds every entry of `other`, replacing existing keys.
    pub fn extend(&mut self, other: StyleObject) {
        self.0.extend(other.0);
    }

    /// Renders top-level declarations as `kebab-case: value;` pairs.
    pub fn to_css_declarations(&self) -> String {
        self.declarations()
            .map(|(property, value)| format!("{}: {};", to_kebab_case(property), value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders a full stylesheet for `selector`, one rule per nested block.
    ///
    /// ```rust
    /// use blade_style::style::{Scalar, StyleObject};
    ///
    /// let mut medium = StyleObject::new();
    /// medium.set("display", Some(Scalar::from("flex")));
    ///
    /// let mut styles = StyleObject::new();
    /// styles.set("display", Some(Scalar::from("block")));
    /// styles.set_block("@media screen and (min-width: 768px)", medium);
    ///
    /// assert_eq!(
    ///     styles.to_stylesheet(".box"),
    ///     ".box {\n  display: block;\n}\n\
    ///      @media screen and (min-width: 768px) {\n  .box {\n    display: flex;\n  }\n}\n"
    /// );
    /// ```
    pub fn to_stylesheet(&self, selector: &str) -> String {
        let mut css = String::new();
        write_rule(&mut css, selector, self, "");
        for (query, block) in self.blocks() {
            let _ = writeln!(css, "{} {{", query);
            write_rule(&mut css, selector, block, "  ");
            css.push_str("}\n");
        }
        css
    }
}

fn write_rule(css: &mut String, selector: &str, styles: &StyleObject, indent: &str) {
    let mut declarations = styles.declarations().peekable();
    if declarations.peek().is_none() {
        return;
    }
    let _ = writeln!(css, "{}{} {{", indent, selector);
    for (property, value) in declarations {
        let _ = writeln!(css, "{}  {}: {};", indent, to_kebab_case(property), value);
    }
    let _ = writeln!(css, "{}}}", indent);
}

/// Converts a camelCase property name to its CSS spelling.
///
/// ```rust
/// use blade_style::style::to_kebab_case;
///
/// assert_eq!(to_kebab_case("borderTopLeftRadius"), "border-top-left-radius");
/// assert_eq!(to_kebab_case("gap"), "gap");
/// ```
pub fn to_kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
