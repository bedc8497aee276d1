//! End-to-end resolution of props bags against built-in and custom themes.

use std::io::Write;

use blade_style::components::{tag_styles, IconName, TagProps};
use blade_style::style::{get_base_box_styles, Platform, StyleProps};
use blade_style::{AdaptiveTheme, ColorScheme, Theme, ThemeChoice};
use serde_json::json;

fn props(value: serde_json::Value) -> StyleProps {
    serde_json::from_value(value).expect("valid props")
}

#[test]
fn test_card_layout_on_web() {
    let props = props(json!({
        "display": { "base": "block", "m": "grid" },
        "gridTemplateColumns": { "m": "1fr 1fr" },
        "padding": ["spacing.4", "spacing.5"],
        "borderWidth": "thin",
        "borderColor": "surface.border.subtle.lowContrast",
        "borderRadius": "large"
    }));

    let styles = get_base_box_styles(&props, Theme::light(), Platform::Web);
    insta::assert_json_snapshot!(styles, @r###"
    {
      "display": "block",
      "padding": "12px 16px",
      "borderRadius": "8px",
      "borderWidth": "1px",
      "borderColor": "hsla(216, 15%, 91%, 1)",
      "borderStyle": "solid",
      "@media screen and (min-width: 768px)": {
        "display": "grid",
        "gridTemplateColumns": "1fr 1fr"
      }
    }
    "###);
}

#[test]
fn test_same_props_on_native() {
    let props = props(json!({
        "display": { "base": "block", "m": "grid" },
        "elevation": "highRaised",
        "opacity": 0.5
    }));

    let styles = get_base_box_styles(&props, Theme::light(), Platform::Native);
    insta::assert_json_snapshot!(styles, @r###"
    {
      "display": "block",
      "opacity": 0.5
    }
    "###);
}

#[test]
fn test_yaml_theme_overrides_tokens() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "spacing:\n  '4': 14\ncolors:\n  brand:\n    primary:\n      '500': rebeccapurple\nborder:\n  width:\n    thin: 2\n  radius:\n    small: 3\nelevation:\n  none: none"
    )
    .unwrap();
    let theme = Theme::from_file(file.path()).unwrap();
    theme.validate().unwrap();

    let props = props(json!({
        "paddingX": "spacing.4",
        "backgroundColor": "brand.primary.500",
        "borderTopWidth": "thin",
        "borderRadius": "small"
    }));
    let styles = get_base_box_styles(&props, &theme, Platform::Web);
    assert_eq!(
        serde_json::to_value(&styles).unwrap(),
        json!({
            "paddingRight": "14px",
            "paddingLeft": "14px",
            "backgroundColor": "rebeccapurple",
            "borderRadius": "3px",
            "borderTopWidth": "2px",
            "borderStyle": "solid"
        })
    );
}

#[test]
fn test_adaptive_choice_changes_colors_only() {
    let adaptive = AdaptiveTheme::builtin();
    let props = props(json!({
        "padding": "spacing.3",
        "backgroundColor": "surface.background.level1.lowContrast"
    }));

    let light = ThemeChoice::Scheme(&adaptive, ColorScheme::Light).resolve();
    let dark = ThemeChoice::Scheme(&adaptive, ColorScheme::Dark).resolve();
    let light_styles = get_base_box_styles(&props, light, Platform::Web);
    let dark_styles = get_base_box_styles(&props, dark, Platform::Web);

    assert_eq!(light_styles.value("padding"), dark_styles.value("padding"));
    assert_ne!(
        light_styles.value("backgroundColor"),
        dark_styles.value("backgroundColor")
    );
}

#[test]
fn test_tag_with_icon_as_stylesheet() {
    let props = TagProps::new("Unpaid").icon(IconName::FileText);
    let styles = tag_styles(Theme::light(), Platform::Web, &props);

    assert_eq!(
        styles.container.to_stylesheet(".tag"),
        ".tag {\n  display: inline-flex;\n  flex-direction: row;\n  align-items: center;\n  \
         padding-top: 2px;\n  padding-bottom: 2px;\n  padding-right: 8px;\n  padding-left: 8px;\n  \
         gap: 4px;\n  background-color: hsla(214, 15%, 18%, 0.06);\n  border-radius: 9999px;\n}\n"
    );
    assert_eq!(styles.icon.map(|i| i.width), Some("12px".to_string()));
}
