//! Aggregation of a props bag into a complete style object.
//!
//! The supported CSS properties form a fixed table. Each entry names the
//! output property, the prop(s) it reads (the first present one wins, which
//! is how `paddingTop` falls back to `paddingY`), and the mapper that turns
//! the prop value into CSS.
//!
//! On the web, the table is resolved once for the base breakpoint and once
//! more per larger breakpoint; non-empty results are nested under the
//! breakpoint's `@media` key. Native targets get a single flat object
//! without elevation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::object::StyleObject;
use super::props::{StyleProp, StyleProps};
use super::resolve::{
    get_border_radius_value, get_border_width_value, get_color_value, get_elevation_value,
    get_raw_value, get_spacing_value,
};
use super::value::Scalar;
use crate::theme::Theme;
use crate::tokens::Breakpoint;

/// The rendering target styles are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Web,
    Native,
}

impl Platform {
    pub fn is_native(self) -> bool {
        self == Platform::Native
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Web => f.write_str("web"),
            Platform::Native => f.write_str("native"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Platform::Web),
            "native" => Ok(Platform::Native),
            other => Err(format!("unknown platform '{}' (expected web or native)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mapper {
    Raw,
    Spacing,
    Color,
    BorderRadius,
    BorderWidth,
    Elevation,
}

#[derive(Debug, Clone, Copy)]
struct CssRule {
    property: &'static str,
    sources: &'static [StyleProp],
    mapper: Mapper,
    base_only: bool,
    web_only: bool,
}

impl CssRule {
    const fn new(property: &'static str, sources: &'static [StyleProp], mapper: Mapper) -> Self {
        Self {
            property,
            sources,
            mapper,
            base_only: false,
            web_only: false,
        }
    }

    const fn base_only(mut self) -> Self {
        self.base_only = true;
        self
    }

    const fn web_only(mut self) -> Self {
        self.web_only = true;
        self
    }

    fn resolve(
        &self,
        props: &StyleProps,
        theme: &Theme,
        breakpoint: Option<Breakpoint>,
    ) -> Option<Scalar> {
        let value = self.sources.iter().find_map(|prop| props.get(*prop));
        let breakpoint = if self.base_only { None } else { breakpoint };
        match self.mapper {
            Mapper::Raw => get_raw_value(value, breakpoint),
            Mapper::Spacing => get_spacing_value(value, theme, breakpoint),
            Mapper::Color => get_color_value(value, theme, breakpoint),
            Mapper::BorderRadius => get_border_radius_value(value, theme, breakpoint),
            Mapper::BorderWidth => get_border_width_value(value, theme, breakpoint),
            Mapper::Elevation => get_elevation_value(value, theme, breakpoint),
        }
    }
}

macro_rules! css_rules {
    ( $( $property:literal <- [ $( $source:ident ),+ ] : $mapper:ident $( . $modifier:ident () )* ),+ $(,)? ) => {
        &[ $( CssRule::new($property, &[ $( StyleProp::$source ),+ ], Mapper::$mapper) $( .$modifier() )* ),+ ]
    };
}

const CSS_RULES: &[CssRule] = css_rules![
    "display" <- [Display]: Raw,
    "overflow" <- [Overflow]: Raw,
    "overflowX" <- [OverflowX]: Raw,
    "overflowY" <- [OverflowY]: Raw,
    "textAlign" <- [TextAlign]: Raw,
    "whiteSpace" <- [WhiteSpace]: Raw,

    // Flex
    "flex" <- [Flex]: Raw,
    "flexWrap" <- [FlexWrap]: Raw,
    "flexDirection" <- [FlexDirection]: Raw,
    "flexGrow" <- [FlexGrow]: Raw,
    "flexShrink" <- [FlexShrink]: Raw,
    "flexBasis" <- [FlexBasis]: Raw,
    "alignItems" <- [AlignItems]: Raw,
    "alignContent" <- [AlignContent]: Raw,
    "alignSelf" <- [AlignSelf]: Raw,
    "justifyItems" <- [JustifyItems]: Raw,
    "justifyContent" <- [JustifyContent]: Raw,
    "justifySelf" <- [JustifySelf]: Raw,
    "placeSelf" <- [PlaceSelf]: Raw,
    "placeItems" <- [PlaceItems]: Raw,
    "order" <- [Order]: Raw,
    "position" <- [Position]: Raw,
    "zIndex" <- [ZIndex]: Raw,

    // Grid
    "grid" <- [Grid]: Raw,
    "gridColumn" <- [GridColumn]: Raw,
    "gridRow" <- [GridRow]: Raw,
    "gridRowStart" <- [GridRowStart]: Raw,
    "gridRowEnd" <- [GridRowEnd]: Raw,
    "gridArea" <- [GridArea]: Raw,
    "gridAutoFlow" <- [GridAutoFlow]: Raw,
    "gridAutoRows" <- [GridAutoRows]: Raw,
    "gridAutoColumns" <- [GridAutoColumns]: Raw,
    "gridTemplate" <- [GridTemplate]: Raw,
    "gridTemplateAreas" <- [GridTemplateAreas]: Raw,
    "gridTemplateColumns" <- [GridTemplateColumns]: Raw,
    "gridTemplateRows" <- [GridTemplateRows]: Raw,

    // Spacing
    "padding" <- [Padding]: Spacing,
    "paddingTop" <- [PaddingTop, PaddingY]: Spacing,
    "paddingBottom" <- [PaddingBottom, PaddingY]: Spacing,
    "paddingRight" <- [PaddingRight, PaddingX]: Spacing,
    "paddingLeft" <- [PaddingLeft, PaddingX]: Spacing,
    "margin" <- [Margin]: Spacing,
    "marginBottom" <- [MarginBottom, MarginY]: Spacing,
    "marginTop" <- [MarginTop, MarginY]: Spacing,
    "marginRight" <- [MarginRight, MarginX]: Spacing,
    "marginLeft" <- [MarginLeft, MarginX]: Spacing,
    "height" <- [Height]: Spacing,
    "minHeight" <- [MinHeight]: Spacing,
    "maxHeight" <- [MaxHeight]: Spacing,
    "width" <- [Width]: Spacing,
    "minWidth" <- [MinWidth]: Spacing,
    "maxWidth" <- [MaxWidth]: Spacing,
    "gap" <- [Gap]: Spacing,
    "rowGap" <- [RowGap]: Spacing,
    "columnGap" <- [ColumnGap]: Spacing,
    "top" <- [Top]: Spacing,
    "right" <- [Right]: Spacing,
    "bottom" <- [Bottom]: Spacing,
    "left" <- [Left]: Spacing,

    // Visual
    "backgroundColor" <- [BackgroundColor]: Color,
    "backgroundImage" <- [BackgroundImage]: Raw,
    "backgroundSize" <- [BackgroundSize]: Raw,
    "backgroundPosition" <- [BackgroundPosition]: Raw,
    "backgroundOrigin" <- [BackgroundOrigin]: Raw,
    "backgroundRepeat" <- [BackgroundRepeat]: Raw,
    "borderRadius" <- [BorderRadius]: BorderRadius,
    "lineHeight" <- [LineHeight]: Spacing,
    "border" <- [Border]: Raw,
    "borderTop" <- [BorderTop]: Raw,
    "borderRight" <- [BorderRight]: Raw,
    "borderBottom" <- [BorderBottom]: Raw,
    "borderLeft" <- [BorderLeft]: Raw,
    "borderWidth" <- [BorderWidth]: BorderWidth,
    "borderColor" <- [BorderColor]: Color,
    "borderTopWidth" <- [BorderTopWidth]: BorderWidth,
    "borderTopColor" <- [BorderTopColor]: Color,
    "borderRightWidth" <- [BorderRightWidth]: BorderWidth,
    "borderRightColor" <- [BorderRightColor]: Color,
    "borderBottomWidth" <- [BorderBottomWidth]: BorderWidth,
    "borderBottomColor" <- [BorderBottomColor]: Color,
    "borderLeftWidth" <- [BorderLeftWidth]: BorderWidth,
    "borderLeftColor" <- [BorderLeftColor]: Color,
    "borderTopLeftRadius" <- [BorderTopLeftRadius]: BorderRadius,
    "borderTopRightRadius" <- [BorderTopRightRadius]: BorderRadius,
    "borderBottomRightRadius" <- [BorderBottomRightRadius]: BorderRadius,
    "borderBottomLeftRadius" <- [BorderBottomLeftRadius]: BorderRadius,
    "touchAction" <- [TouchAction]: Raw,
    "userSelect" <- [UserSelect]: Raw,
    "pointerEvents" <- [PointerEvents]: Raw.base_only(),
    "opacity" <- [Opacity]: Raw,
    "boxShadow" <- [Elevation]: Elevation.web_only(),
];

/// Output properties whose presence implies a solid border style.
const BORDER_STYLE_TRIGGERS: &[&str] = &[
    "borderBottom",
    "borderTop",
    "borderLeft",
    "borderRight",
    "borderBottomColor",
    "borderTopColor",
    "borderLeftColor",
    "borderRightColor",
    "borderBottomWidth",
    "borderTopWidth",
    "borderLeftWidth",
    "borderRightWidth",
    "borderWidth",
    "borderColor",
];

/// Names of every CSS property [`get_all_props`] can emit, in output order.
pub fn supported_properties() -> impl Iterator<Item = &'static str> {
    CSS_RULES
        .iter()
        .map(|rule| rule.property)
        .chain(std::iter::once("borderStyle"))
}

/// Resolves every supported property for one breakpoint.
///
/// `None` computes the base styles. A base-only property (such as
/// `pointerEvents`) is left out of breakpoint-specific results.
pub fn get_all_props(
    props: &StyleProps,
    theme: &Theme,
    platform: Platform,
    breakpoint: Option<Breakpoint>,
) -> StyleObject {
    let at_breakpoint = breakpoint.is_some_and(|bp| !bp.is_base());
    let mut styles = StyleObject::new();

    for rule in CSS_RULES {
        if rule.web_only && platform.is_native() {
            continue;
        }
        if rule.base_only && at_breakpoint {
            continue;
        }
        styles.set(rule.property, rule.resolve(props, theme, breakpoint));
    }

    if BORDER_STYLE_TRIGGERS.iter().any(|property| styles.contains(property)) {
        styles.set("borderStyle", Some(Scalar::from("solid")));
    }

    styles
}

/// A breakpoint block is emitted only if it resolved at least one value.
pub fn should_add_breakpoint(styles: &StyleObject) -> bool {
    !styles.is_empty()
}

/// Resolves the props for each non-base breakpoint, keyed by media query.
///
/// Always empty on native targets.
pub fn get_all_media_queries(props: &StyleProps, theme: &Theme, platform: Platform) -> StyleObject {
    let mut queries = StyleObject::new();
    if platform.is_native() {
        return queries;
    }

    for breakpoint in Breakpoint::without_base() {
        let styles = get_all_props(props, theme, platform, Some(breakpoint));
        if !should_add_breakpoint(&styles) {
            continue;
        }
        tracing::trace!(%breakpoint, properties = styles.len(), "adding breakpoint block");
        queries.set_block(breakpoint.media_query_key(), styles);
    }
    queries
}

/// Computes the full style object for a Box-like element.
///
/// # Example
///
/// ```rust
/// use blade_style::style::{get_base_box_styles, Platform, PropValue, Responsive, StyleProp, StyleProps};
/// use blade_style::tokens::Breakpoint;
/// use blade_style::Theme;
///
/// let props = StyleProps::new()
///     .set(StyleProp::Display, "flex")
///     .set(
///         StyleProp::Padding,
///         Responsive::from_breakpoints([
///             (Breakpoint::Base, PropValue::from("spacing.2")),
///             (Breakpoint::M, PropValue::from("spacing.4")),
///         ]),
///     );
///
/// let styles = get_base_box_styles(&props, Theme::light(), Platform::Web);
/// assert_eq!(styles.value("padding").unwrap().to_string(), "4px");
///
/// let medium = styles.block("@media screen and (min-width: 768px)").unwrap();
/// assert_eq!(medium.value("padding").unwrap().to_string(), "12px");
/// assert!(medium.value("display").is_none());
/// ```
pub fn get_base_box_styles(props: &StyleProps, theme: &Theme, platform: Platform) -> StyleObject {
    let mut styles = get_all_props(props, theme, platform, None);
    styles.extend(get_all_media_queries(props, theme, platform));
    styles
}
