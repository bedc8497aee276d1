//! `blade-style resolve`: turn a props file into a style object.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blade_style::style::{get_base_box_styles, Platform, StyleProps};
use clap::{Args, ValueEnum};

use super::ThemeArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// CSS-in-JS object
    #[default]
    Json,
    /// Stylesheet text
    Css,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Props file (.json, .yaml or .yml)
    #[arg(long)]
    pub props: PathBuf,

    /// Target platform (web or native)
    #[arg(long, default_value_t = Platform::Web)]
    pub platform: Platform,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Selector used for CSS output
    #[arg(long, default_value = ".box")]
    pub selector: String,

    #[command(flatten)]
    pub theme: ThemeArgs,
}

pub fn run(args: &ResolveArgs) -> Result<String> {
    let theme = args.theme.load()?;
    let props = load_props(&args.props)?;
    tracing::debug!(
        props = props.len(),
        platform = %args.platform,
        theme = theme.name(),
        "resolving props"
    );

    let styles = get_base_box_styles(&props, &theme, args.platform);
    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&styles)?),
        OutputFormat::Css => Ok(styles.to_stylesheet(&args.selector)),
    }
}

fn load_props(path: &Path) -> Result<StyleProps> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read props from {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let props = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid props in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid props in {}", path.display()))?
    };
    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blade_style::ColorScheme;
    use std::io::Write;

    fn props_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(path: &Path, platform: Platform, format: OutputFormat) -> ResolveArgs {
        ResolveArgs {
            props: path.to_path_buf(),
            platform,
            format,
            selector: ".card".to_string(),
            theme: ThemeArgs {
                theme: None,
                scheme: Some(ColorScheme::Light),
            },
        }
    }

    #[test]
    fn test_json_props_to_css() {
        let file = props_file(
            ".json",
            r#"{ "display": "flex", "padding": { "base": "spacing.2", "m": "spacing.4" } }"#,
        );
        let out = run(&args(file.path(), Platform::Web, OutputFormat::Css)).unwrap();
        assert_eq!(
            out,
            ".card {\n  display: flex;\n  padding: 4px;\n}\n\
             @media screen and (min-width: 768px) {\n  .card {\n    padding: 12px;\n  }\n}\n"
        );
    }

    #[test]
    fn test_yaml_props_to_json_on_native() {
        let file = props_file(
            ".yaml",
            "margin: [spacing.1, auto]\nelevation: lowRaised\npaddingY:\n  base: spacing.3\n  xl: spacing.5\n",
        );
        let out = run(&args(file.path(), Platform::Native, OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "paddingTop": "8px",
                "paddingBottom": "8px",
                "margin": "2px auto"
            })
        );
    }

    #[test]
    fn test_unknown_prop_names_the_file() {
        let file = props_file(".json", r#"{ "colour": "red" }"#);
        let err = run(&args(file.path(), Platform::Web, OutputFormat::Json)).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("invalid props"));
        assert!(message.contains("colour"));
    }

    #[test]
    fn test_too_long_shorthand_is_rejected() {
        let file = props_file(".json", r#"{ "margin": [1, 2, 3, 4, 5] }"#);
        let err = run(&args(file.path(), Platform::Web, OutputFormat::Json)).unwrap_err();
        assert!(format!("{:#}", err).contains("at most 4"));
    }
}
