//! Tag: a pill-shaped keyword label with an optional leading icon.

use serde::{Deserialize, Serialize};

use super::icon::{icon_styles, IconName, IconSize, IconStyles};
use crate::style::{
    get_base_box_styles, resolve_token, Platform, Scalar, StyleObject, StyleProp, StyleProps,
    StyledProps,
};
use crate::theme::Theme;

const TEXT_COLOR: &str = "surface.text.subtle.lowContrast";
const TEXT_COLOR_DISABLED: &str = "surface.text.placeholder.lowContrast";
const ICON_COLOR: &str = "surface.action.icon.default.lowContrast";
const ICON_COLOR_DISABLED: &str = "surface.action.icon.disabled.lowContrast";
const BACKGROUND_COLOR: &str = "brand.gray.a50.lowContrast";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSize {
    #[default]
    Medium,
    Large,
}

impl TagSize {
    fn padding_x(self) -> &'static str {
        match self {
            TagSize::Medium => "spacing.3",
            TagSize::Large => "spacing.4",
        }
    }

    fn padding_y(self) -> &'static str {
        match self {
            TagSize::Medium => "spacing.1",
            TagSize::Large => "spacing.2",
        }
    }

    fn icon_size(self) -> IconSize {
        match self {
            TagSize::Medium => IconSize::Small,
            TagSize::Large => IconSize::Medium,
        }
    }
}

/// Everything a Tag is rendered from.
///
/// `styled_props` only carries the outer-layout subset; other style props
/// are dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagProps {
    pub label: String,
    #[serde(default)]
    pub size: TagSize,
    #[serde(default)]
    pub icon: Option<IconName>,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub styled_props: StyledProps,
}

impl TagProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn size(mut self, size: TagSize) -> Self {
        self.size = size;
        self
    }

    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub fn styled_props(mut self, props: StyledProps) -> Self {
        self.styled_props = props;
        self
    }
}

/// Resolved styles of a Tag's parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStyles {
    pub container: StyleObject,
    pub text_color: String,
    pub icon: Option<IconStyles>,
}

/// Computes the container, label and icon styles of a Tag.
///
/// Caller styled props are layered over the Tag's own layout, so a
/// responsive `marginRight` ends up in the container's media queries.
pub fn tag_styles(theme: &Theme, platform: Platform, props: &TagProps) -> TagStyles {
    let base = StyleProps::new()
        .set(StyleProp::Display, "inline-flex")
        .set(StyleProp::FlexDirection, "row")
        .set(StyleProp::AlignItems, "center")
        .set(StyleProp::Gap, "spacing.2")
        .set(StyleProp::PaddingX, props.size.padding_x())
        .set(StyleProp::PaddingY, props.size.padding_y())
        .set(StyleProp::BackgroundColor, BACKGROUND_COLOR)
        .set(StyleProp::BorderRadius, "max");
    let container_props = base.merge(props.styled_props.props().clone());

    let (text_token, icon_token) = if props.is_disabled {
        (TEXT_COLOR_DISABLED, ICON_COLOR_DISABLED)
    } else {
        (TEXT_COLOR, ICON_COLOR)
    };

    tracing::trace!(label = %props.label, disabled = props.is_disabled, "computing tag styles");

    TagStyles {
        container: get_base_box_styles(&container_props, theme, platform),
        text_color: resolve_token(theme, "colors", &Scalar::from(text_token)).to_string(),
        icon: props
            .icon
            .map(|_| icon_styles(theme, icon_token, props.size.icon_size())),
    }
}
