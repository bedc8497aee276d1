//! Icon sizing and color resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::{resolve_token, Scalar, StyleError, StyleObject};
use crate::theme::Theme;
use crate::tokens::make_size;

macro_rules! icon_names {
    ( $( $variant:ident => $name:literal ),+ $(,)? ) => {
        /// The icons of the design system's icon set.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IconName {
            $( $variant ),+
        }

        impl IconName {
            pub const ALL: &'static [IconName] = &[ $( IconName::$variant ),+ ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( IconName::$variant => $name ),+
                }
            }
        }
    };
}

icon_names! {
    AlertCircle => "AlertCircleIcon",
    Attachment => "AttachmentIcon",
    ChevronDown => "ChevronDownIcon",
    Coins => "CoinsIcon",
    Download => "DownloadIcon",
    FileText => "FileTextIcon",
    Gitlab => "GitlabIcon",
    LifeBuoy => "LifeBuoyIcon",
    Lock => "LockIcon",
    Plus => "PlusIcon",
    PlusCircle => "PlusCircleIcon",
    Sun => "SunIcon",
    UploadCloud => "UploadCloudIcon",
    UserMinus => "UserMinusIcon",
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconName::ALL
            .iter()
            .copied()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| StyleError::UnknownIcon(s.to_string()))
    }
}

impl Serialize for IconName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Icon dimensions, from `xsmall` (8px) to `2xlarge` (32px).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IconSize {
    #[serde(rename = "xsmall")]
    XSmall,
    #[serde(rename = "small")]
    Small,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "large")]
    Large,
    #[serde(rename = "xlarge")]
    XLarge,
    #[serde(rename = "2xlarge")]
    XXLarge,
}

impl IconSize {
    pub fn px(self) -> u32 {
        match self {
            IconSize::XSmall => 8,
            IconSize::Small => 12,
            IconSize::Medium => 16,
            IconSize::Large => 20,
            IconSize::XLarge => 24,
            IconSize::XXLarge => 32,
        }
    }
}

/// Resolved presentation of one icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconStyles {
    pub width: String,
    pub height: String,
    pub color: String,
}

impl IconStyles {
    pub fn to_style_object(&self) -> StyleObject {
        let mut styles = StyleObject::new();
        styles.set("width", Some(Scalar::from(self.width.as_str())));
        styles.set("height", Some(Scalar::from(self.height.as_str())));
        styles.set("color", Some(Scalar::from(self.color.as_str())));
        styles
    }
}

/// Computes the square size and fill color of an icon.
///
/// `color` is a token under `colors` (for example
/// `feedback.icon.neutral.lowContrast`); anything else is used verbatim.
///
/// ```rust
/// use blade_style::components::{icon_styles, IconSize};
/// use blade_style::Theme;
///
/// let styles = icon_styles(Theme::light(), "feedback.icon.neutral.lowContrast", IconSize::Large);
/// assert_eq!(styles.width, "20px");
/// assert_eq!(styles.color, "hsla(216, 27%, 36%, 1)");
/// ```
pub fn icon_styles(theme: &Theme, color: &str, size: IconSize) -> IconStyles {
    let side = make_size(size.px());
    IconStyles {
        width: side.clone(),
        height: side,
        color: resolve_token(theme, "colors", &Scalar::from(color)).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_strings() {
        for icon in IconName::ALL {
            assert_eq!(icon.as_str().parse::<IconName>(), Ok(*icon));
            assert!(icon.as_str().ends_with("Icon"));
        }
    }

    #[test]
    fn test_unknown_icon_is_an_error() {
        assert_eq!(
            "Chevron".parse::<IconName>(),
            Err(StyleError::UnknownIcon("Chevron".to_string()))
        );
    }

    #[test]
    fn test_sizes_scale_up() {
        let sizes: Vec<u32> = [
            IconSize::XSmall,
            IconSize::Small,
            IconSize::Medium,
            IconSize::Large,
            IconSize::XLarge,
            IconSize::XXLarge,
        ]
        .iter()
        .map(|s| s.px())
        .collect();
        assert_eq!(sizes, vec![8, 12, 16, 20, 24, 32]);
    }

    #[test]
    fn test_size_names_on_the_wire() {
        let size: IconSize = serde_json::from_str("\"2xlarge\"").unwrap();
        assert_eq!(size, IconSize::XXLarge);
        assert_eq!(serde_json::to_string(&IconSize::XSmall).unwrap(), "\"xsmall\"");
    }

    #[test]
    fn test_theme_dependent_color() {
        let light = icon_styles(Theme::light(), "feedback.icon.neutral.highContrast", IconSize::Small);
        let dark = icon_styles(Theme::dark(), "feedback.icon.neutral.highContrast", IconSize::Small);
        assert_eq!(light.height, "12px");
        assert_ne!(light.color, dark.color);
    }

    #[test]
    fn test_literal_color_passes_through() {
        let styles = icon_styles(Theme::light(), "#ff0000", IconSize::Medium);
        assert_eq!(styles.color, "#ff0000");
    }

    #[test]
    fn test_style_object_has_three_entries() {
        let styles = icon_styles(Theme::light(), "brand.primary.500", IconSize::XLarge);
        let object = styles.to_style_object();
        assert_eq!(object.to_css_declarations(), "width: 24px; height: 24px; color: hsla(218, 89%, 51%, 1);");
    }
}
