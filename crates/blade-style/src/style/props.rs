//! The style prop schema and the props bag callers fill in.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::StyleError;
use super::value::{PropValue, Responsive};

macro_rules! style_props {
    ( $( $variant:ident => $name:literal ),+ $(,)? ) => {
        /// Every style prop a caller may set, named as on the wire.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum StyleProp {
            $( $variant ),+
        }

        impl StyleProp {
            /// All props in schema order.
            pub const ALL: &'static [StyleProp] = &[ $( StyleProp::$variant ),+ ];

            /// The camelCase prop name, e.g. `paddingX`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( StyleProp::$variant => $name ),+
                }
            }
        }
    };
}

style_props! {
    Display => "display",
    Overflow => "overflow",
    OverflowX => "overflowX",
    OverflowY => "overflowY",
    TextAlign => "textAlign",
    WhiteSpace => "whiteSpace",

    Flex => "flex",
    FlexWrap => "flexWrap",
    FlexDirection => "flexDirection",
    FlexGrow => "flexGrow",
    FlexShrink => "flexShrink",
    FlexBasis => "flexBasis",
    AlignItems => "alignItems",
    AlignContent => "alignContent",
    AlignSelf => "alignSelf",
    JustifyItems => "justifyItems",
    JustifyContent => "justifyContent",
    JustifySelf => "justifySelf",
    PlaceSelf => "placeSelf",
    PlaceItems => "placeItems",
    Order => "order",
    Position => "position",
    ZIndex => "zIndex",

    Grid => "grid",
    GridColumn => "gridColumn",
    GridRow => "gridRow",
    GridRowStart => "gridRowStart",
    GridRowEnd => "gridRowEnd",
    GridArea => "gridArea",
    GridAutoFlow => "gridAutoFlow",
    GridAutoRows => "gridAutoRows",
    GridAutoColumns => "gridAutoColumns",
    GridTemplate => "gridTemplate",
    GridTemplateAreas => "gridTemplateAreas",
    GridTemplateColumns => "gridTemplateColumns",
    GridTemplateRows => "gridTemplateRows",

    Padding => "padding",
    PaddingX => "paddingX",
    PaddingY => "paddingY",
    PaddingTop => "paddingTop",
    PaddingBottom => "paddingBottom",
    PaddingRight => "paddingRight",
    PaddingLeft => "paddingLeft",
    Margin => "margin",
    MarginX => "marginX",
    MarginY => "marginY",
    MarginTop => "marginTop",
    MarginBottom => "marginBottom",
    MarginRight => "marginRight",
    MarginLeft => "marginLeft",
    Height => "height",
    MinHeight => "minHeight",
    MaxHeight => "maxHeight",
    Width => "width",
    MinWidth => "minWidth",
    MaxWidth => "maxWidth",
    Gap => "gap",
    RowGap => "rowGap",
    ColumnGap => "columnGap",
    Top => "top",
    Right => "right",
    Bottom => "bottom",
    Left => "left",

    BackgroundColor => "backgroundColor",
    BackgroundImage => "backgroundImage",
    BackgroundSize => "backgroundSize",
    BackgroundPosition => "backgroundPosition",
    BackgroundOrigin => "backgroundOrigin",
    BackgroundRepeat => "backgroundRepeat",
    BorderRadius => "borderRadius",
    LineHeight => "lineHeight",
    Border => "border",
    BorderTop => "borderTop",
    BorderRight => "borderRight",
    BorderBottom => "borderBottom",
    BorderLeft => "borderLeft",
    BorderWidth => "borderWidth",
    BorderColor => "borderColor",
    BorderTopWidth => "borderTopWidth",
    BorderTopColor => "borderTopColor",
    BorderRightWidth => "borderRightWidth",
    BorderRightColor => "borderRightColor",
    BorderBottomWidth => "borderBottomWidth",
    BorderBottomColor => "borderBottomColor",
    BorderLeftWidth => "borderLeftWidth",
    BorderLeftColor => "borderLeftColor",
    BorderTopLeftRadius => "borderTopLeftRadius",
    BorderTopRightRadius => "borderTopRightRadius",
    BorderBottomRightRadius => "borderBottomRightRadius",
    BorderBottomLeftRadius => "borderBottomLeftRadius",
    TouchAction => "touchAction",
    UserSelect => "userSelect",
    PointerEvents => "pointerEvents",
    Opacity => "opacity",
    Elevation => "elevation",
}

impl StyleProp {
    /// Whether every component accepts this prop for outer layout.
    ///
    /// Styled props cover margins, positioning, self-alignment and grid
    /// placement; everything else is reserved for the component itself.
    pub fn is_styled_prop(self) -> bool {
        use StyleProp::*;
        matches!(
            self,
            Margin
                | MarginX
                | MarginY
                | MarginTop
                | MarginBottom
                | MarginRight
                | MarginLeft
                | Position
                | ZIndex
                | Top
                | Right
                | Bottom
                | Left
                | AlignSelf
                | JustifySelf
                | PlaceSelf
                | Order
                | GridColumn
                | GridRow
                | GridRowStart
                | GridRowEnd
                | GridArea
                | Display
        )
    }
}

impl fmt::Display for StyleProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleProp {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProp::ALL
            .iter()
            .copied()
            .find(|prop| prop.as_str() == s)
            .ok_or_else(|| StyleError::UnknownProp(s.to_string()))
    }
}

impl Serialize for StyleProp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleProp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

/// A bag of style props for one element.
///
/// Absent props are simply not in the bag; `null` entries are dropped when
/// deserializing.
///
/// # Example
///
/// ```rust
/// use blade_style::style::{StyleProp, StyleProps};
///
/// let props = StyleProps::new()
///     .set(StyleProp::Display, "flex")
///     .set(StyleProp::PaddingX, "spacing.4");
///
/// assert_eq!(props.len(), 2);
/// assert!(props.get(StyleProp::PaddingX).is_some());
///
/// let parsed: StyleProps =
///     serde_json::from_str(r#"{ "display": "flex", "paddingX": "spacing.4" }"#).unwrap();
/// assert_eq!(parsed, props);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleProps(BTreeMap<StyleProp, Responsive<PropValue>>);

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a prop, returning the updated bag for chaining.
    pub fn set(mut self, prop: StyleProp, value: impl Into<Responsive<PropValue>>) -> Self {
        self.insert(prop, value);
        self
    }

    pub fn insert(&mut self, prop: StyleProp, value: impl Into<Responsive<PropValue>>) {
        self.0.insert(prop, value.into());
    }

    pub fn remove(&mut self, prop: StyleProp) -> Option<Responsive<PropValue>> {
        self.0.remove(&prop)
    }

    pub fn get(&self, prop: StyleProp) -> Option<&Responsive<PropValue>> {
        self.0.get(&prop)
    }

    pub fn contains(&self, prop: StyleProp) -> bool {
        self.0.contains_key(&prop)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, &Responsive<PropValue>)> {
        self.0.iter().map(|(prop, value)| (*prop, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlays `other` on top of `self`; props set in `other` win.
    pub fn merge(mut self, other: StyleProps) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl<'de> Deserialize<'de> for StyleProps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<StyleProp, Option<Responsive<PropValue>>>::deserialize(deserializer)?;
        Ok(StyleProps(
            raw.into_iter()
                .filter_map(|(prop, value)| value.map(|v| (prop, v)))
                .collect(),
        ))
    }
}

impl FromIterator<(StyleProp, Responsive<PropValue>)> for StyleProps {
    fn from_iter<I: IntoIterator<Item = (StyleProp, Responsive<PropValue>)>>(iter: I) -> Self {
        StyleProps(iter.into_iter().collect())
    }
}

/// The restricted prop set components accept from their callers.
///
/// Built from a full [`StyleProps`] bag by keeping only props for which
/// [`StyleProp::is_styled_prop`] holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyledProps(StyleProps);

impl StyledProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_props(props: &StyleProps) -> Self {
        StyledProps(
            props
                .iter()
                .filter(|(prop, _)| prop.is_styled_prop())
                .map(|(prop, value)| (prop, value.clone()))
                .collect(),
        )
    }

    pub fn props(&self) -> &StyleProps {
        &self.0
    }

    pub fn into_props(self) -> StyleProps {
        self.0
    }
}

impl<'de> Deserialize<'de> for StyledProps {
    /// Props outside the styled subset are dropped.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let props = StyleProps::deserialize(deserializer)?;
        Ok(StyledProps::from_props(&props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Shorthand;
    use crate::tokens::Breakpoint;
    use serde_json::json;

    #[test]
    fn test_prop_names_are_unique() {
        let mut names: Vec<&str> = StyleProp::ALL.iter().map(|p| p.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_prop_parse() {
        assert_eq!("borderTopLeftRadius".parse(), Ok(StyleProp::BorderTopLeftRadius));
        assert_eq!(
            "colour".parse::<StyleProp>(),
            Err(StyleError::UnknownProp("colour".to_string()))
        );
    }

    #[test]
    fn test_styled_prop_membership() {
        assert!(StyleProp::MarginX.is_styled_prop());
        assert!(StyleProp::GridArea.is_styled_prop());
        assert!(!StyleProp::Padding.is_styled_prop());
        assert!(!StyleProp::BackgroundColor.is_styled_prop());
    }

    #[test]
    fn test_deserialize_props_bag() {
        let props: StyleProps = serde_json::from_value(json!({
            "display": "flex",
            "margin": ["spacing.1", "spacing.2"],
            "padding": { "base": "spacing.2", "m": "spacing.4" },
            "zIndex": 10,
            "opacity": null
        }))
        .unwrap();

        assert_eq!(props.len(), 4);
        assert!(!props.contains(StyleProp::Opacity));
        assert_eq!(
            props.get(StyleProp::Margin),
            Some(&Responsive::Value(PropValue::Shorthand(
                Shorthand::new(["spacing.1", "spacing.2"]).unwrap()
            )))
        );
        assert_eq!(
            props.get(StyleProp::Padding).and_then(|p| p.at(Some(Breakpoint::M))),
            Some(&PropValue::from("spacing.4"))
        );
    }

    #[test]
    fn test_deserialize_unknown_prop() {
        let err = serde_json::from_value::<StyleProps>(json!({ "colour": "red" })).unwrap_err();
        assert!(err.to_string().contains("unknown style prop 'colour'"));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let props: StyleProps =
            serde_yaml::from_str("paddingY: spacing.3\nflexGrow: 1\n").unwrap();
        assert_eq!(props.get(StyleProp::FlexGrow), Some(&Responsive::from(1)));
    }

    #[test]
    fn test_serialize_props_bag() {
        let props = StyleProps::new()
            .set(StyleProp::Gap, "spacing.2")
            .set(
                StyleProp::Display,
                Responsive::from_breakpoints([
                    (Breakpoint::Base, PropValue::from("block")),
                    (Breakpoint::L, PropValue::from("flex")),
                ]),
            );
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({ "display": { "base": "block", "l": "flex" }, "gap": "spacing.2" })
        );
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = StyleProps::new()
            .set(StyleProp::Padding, "spacing.1")
            .set(StyleProp::Display, "flex");
        let overrides = StyleProps::new().set(StyleProp::Padding, "spacing.5");
        let merged = base.merge(overrides);
        assert_eq!(merged.get(StyleProp::Padding), Some(&Responsive::from("spacing.5")));
        assert_eq!(merged.get(StyleProp::Display), Some(&Responsive::from("flex")));
    }

    #[test]
    fn test_styled_props_filter() {
        let props = StyleProps::new()
            .set(StyleProp::MarginTop, "spacing.2")
            .set(StyleProp::BackgroundColor, "surface.background.level1.lowContrast");
        let styled = StyledProps::from_props(&props);
        assert_eq!(styled.props().len(), 1);
        assert!(styled.props().contains(StyleProp::MarginTop));
    }

    #[test]
    fn test_styled_props_deserialize_drops_reserved() {
        let styled: StyledProps =
            serde_json::from_value(json!({ "marginX": "spacing.3", "padding": "spacing.9" }))
                .unwrap();
        assert!(styled.props().contains(StyleProp::MarginX));
        assert!(!styled.props().contains(StyleProp::Padding));
    }
}
