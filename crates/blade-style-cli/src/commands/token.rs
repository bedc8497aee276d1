//! `blade-style token`: look up one token by dotted path.

use anyhow::{bail, Result};
use clap::Args;
use serde_json::Value;

use super::ThemeArgs;

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Dotted token path, e.g. `spacing.4` or `colors.brand.primary.500`
    pub path: String,

    #[command(flatten)]
    pub theme: ThemeArgs,
}

pub fn run(args: &TokenArgs) -> Result<String> {
    let theme = args.theme.load()?;
    match theme.get(&args.path) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(group @ (Value::Object(_) | Value::Array(_))) => {
            Ok(serde_json::to_string_pretty(group)?)
        }
        Some(other) => Ok(other.to_string()),
        None => bail!("token '{}' not found in theme '{}'", args.path, theme.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blade_style::ColorScheme;

    fn args(path: &str) -> TokenArgs {
        TokenArgs {
            path: path.to_string(),
            theme: ThemeArgs {
                theme: None,
                scheme: Some(ColorScheme::Light),
            },
        }
    }

    #[test]
    fn test_string_tokens_print_unquoted() {
        assert_eq!(run(&args("colors.brand.primary.500")).unwrap(), "hsla(218, 89%, 51%, 1)");
    }

    #[test]
    fn test_groups_print_as_json() {
        let out = run(&args("border.width")).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["thick"], serde_json::json!(1.5));
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        let err = run(&args("spacing.99")).unwrap_err();
        assert_eq!(err.to_string(), "token 'spacing.99' not found in theme 'light'");
    }
}
