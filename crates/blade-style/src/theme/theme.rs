//! Theme struct holding the design token tree.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use super::error::ThemeError;

/// Token namespaces every theme must provide as objects.
pub const REQUIRED_NAMESPACES: &[&str] = &[
    "spacing",
    "colors",
    "border.width",
    "border.radius",
    "elevation",
];

static LIGHT: Lazy<Theme> = Lazy::new(|| {
    Theme::from_json_str(include_str!("../../themes/light.json"))
        .expect("built-in light theme is valid JSON")
});

static DARK: Lazy<Theme> = Lazy::new(|| {
    Theme::from_json_str(include_str!("../../themes/dark.json"))
        .expect("built-in dark theme is valid JSON")
});

/// A named tree of design tokens.
///
/// Tokens are addressed by dotted paths such as `spacing.4` or
/// `colors.surface.text.normal.lowContrast`. A theme is immutable once built
/// and is shared by reference across style resolutions.
///
/// # Example
///
/// ```rust
/// use blade_style::Theme;
/// use serde_json::json;
///
/// let theme = Theme::new("compact")
///     .add("spacing.4", 12)
///     .add("colors.brand.primary.500", "hsla(218, 89%, 51%, 1)")
///     .add("border.radius.medium", 4);
///
/// assert_eq!(theme.get("spacing.4"), Some(&json!(12)));
/// assert_eq!(theme.get("spacing.40"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    tokens: Map<String, Value>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Map::new(),
        }
    }

    /// The built-in light theme.
    pub fn light() -> &'static Theme {
        &LIGHT
    }

    /// The built-in dark theme.
    pub fn dark() -> &'static Theme {
        &DARK
    }

    /// Builds a theme from a token document.
    ///
    /// A top-level string `name` entry becomes the theme name and is removed
    /// from the token tree; otherwise the theme is called `custom`.
    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        let Value::Object(mut tokens) = value else {
            return Err(ThemeError::NotAnObject);
        };
        let name = match tokens.remove("name") {
            Some(Value::String(name)) => name,
            Some(other) => {
                tokens.insert("name".to_string(), other);
                "custom".to_string()
            }
            None => "custom".to_string(),
        };
        Ok(Self { name, tokens })
    }

    pub fn from_json_str(source: &str) -> Result<Self, ThemeError> {
        Self::from_value(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        Self::from_value(serde_yaml::from_str(source)?)
    }

    /// Loads a theme file, choosing the parser from its extension.
    ///
    /// Themes without an explicit `name` entry are named after the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut theme = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => return Err(ThemeError::UnsupportedFormat(path.to_path_buf())),
        };

        if theme.name == "custom" {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                theme.name = stem.to_string();
            }
        }

        tracing::debug!(
            path = %path.display(),
            theme = %theme.name,
            "loaded theme"
        );
        Ok(theme)
    }

    /// Adds a token at a dotted path, returning an updated theme for chaining.
    ///
    /// Intermediate objects are created as needed; a non-object value in the
    /// middle of the path is replaced by an object.
    pub fn add(mut self, path: &str, value: impl Into<Value>) -> Self {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(last) = segments.pop() else {
            return self;
        };

        let mut current = &mut self.tokens;
        for segment in segments {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = match entry {
                Value::Object(map) => map,
                _ => unreachable!("entry was just made an object"),
            };
        }
        current.insert(last.to_string(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the token at a dotted path.
    ///
    /// Numeric segments also index into arrays, so `elevation.levels.0`
    /// works for list-valued tokens.
    pub fn get(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return None;
        }
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.tokens.get(first)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Returns the token tree as a JSON value, including the theme name.
    pub fn to_value(&self) -> Value {
        let mut tokens = self.tokens.clone();
        tokens.insert("name".to_string(), Value::String(self.name.clone()));
        Value::Object(tokens)
    }

    /// Checks that every namespace in [`REQUIRED_NAMESPACES`] is present and
    /// is an object.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for namespace in REQUIRED_NAMESPACES {
            match self.get(namespace) {
                Some(Value::Object(_)) => {}
                Some(_) => return Err(ThemeError::InvalidNamespace(namespace.to_string())),
                None => return Err(ThemeError::MissingNamespace(namespace.to_string())),
            }
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_theme_add_nested() {
        let theme = Theme::new("t").add("border.radius.small", 2);
        assert_eq!(theme.get("border.radius.small"), Some(&json!(2)));
        assert!(theme.get("border.radius").unwrap().is_object());
    }

    #[test]
    fn test_theme_add_replaces_scalar_parent() {
        let theme = Theme::new("t")
            .add("elevation", "none")
            .add("elevation.lowRaised", "0 1px 2px black");
        assert_eq!(theme.get("elevation.lowRaised"), Some(&json!("0 1px 2px black")));
    }

    #[test]
    fn test_theme_get_missing() {
        let theme = Theme::new("t").add("spacing.4", 12);
        assert_eq!(theme.get("spacing.5"), None);
        assert_eq!(theme.get("spacing.4.deeper"), None);
        assert_eq!(theme.get(""), None);
    }

    #[test]
    fn test_theme_get_array_index() {
        let theme = Theme::from_value(json!({ "shadows": ["a", "b"] })).unwrap();
        assert_eq!(theme.get("shadows.1"), Some(&json!("b")));
        assert_eq!(theme.get("shadows.x"), None);
    }

    #[test]
    fn test_builtin_themes_validate() {
        assert!(Theme::light().validate().is_ok());
        assert!(Theme::dark().validate().is_ok());
        assert_eq!(Theme::light().name(), "light");
        assert_eq!(Theme::dark().name(), "dark");
    }

    #[test]
    fn test_builtin_spacing_token() {
        assert_eq!(Theme::light().get("spacing.4"), Some(&json!(12)));
    }

    #[test]
    fn test_validate_missing_namespace() {
        let theme = Theme::new("t").add("spacing.1", 2);
        match theme.validate() {
            Err(ThemeError::MissingNamespace(ns)) => assert_eq!(ns, "colors"),
            other => panic!("expected missing namespace, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_invalid_namespace() {
        let theme = Theme::light().clone().add("elevation", "flat");
        assert!(matches!(
            theme.validate(),
            Err(ThemeError::InvalidNamespace(ns)) if ns == "elevation"
        ));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(matches!(
            Theme::from_value(json!([1, 2])),
            Err(ThemeError::NotAnObject)
        ));
    }

    #[test]
    fn test_from_value_without_name() {
        let theme = Theme::from_value(json!({ "spacing": {} })).unwrap();
        assert_eq!(theme.name(), "custom");
    }

    #[test]
    fn test_from_yaml_str() {
        let theme = Theme::from_yaml_str(
            "name: compact\nspacing:\n  \"4\": 10\nborder:\n  radius:\n    round: 50%\n",
        )
        .unwrap();
        assert_eq!(theme.name(), "compact");
        assert_eq!(theme.get("spacing.4"), Some(&json!(10)));
        assert_eq!(theme.get("border.radius.round"), Some(&json!("50%")));
    }

    #[test]
    fn test_from_file_json_uses_stem_as_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brand.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "spacing": {{ "1": 2 }} }}"#).unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name(), "brand");
        assert_eq!(theme.get("spacing.1"), Some(&json!(2)));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "spacing = {}").unwrap();
        assert!(matches!(
            Theme::from_file(&path),
            Err(ThemeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        assert!(matches!(Theme::from_file(&path), Err(ThemeError::Io { .. })));
    }

    #[test]
    fn test_to_value_keeps_name() {
        let theme = Theme::new("t").add("spacing.1", 2);
        let value = theme.to_value();
        assert_eq!(value["name"], json!("t"));
        assert_eq!(Theme::from_value(value).unwrap(), theme);
    }
}
