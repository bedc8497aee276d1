//! Value mappers turning prop values into concrete CSS values.
//!
//! Every mapper takes the (possibly absent) responsive prop value, the theme
//! and the breakpoint being computed. `None` means "omit this property": the
//! prop is absent, empty, or has no entry for the breakpoint.
//!
//! Token references that the theme does not define are passed through
//! unchanged, so literals like `"10px"` or `"#fff"` work wherever a token
//! would.

use super::value::{PropValue, Responsive, Scalar};
use crate::theme::Theme;
use crate::tokens::{make_border_size, make_space, Breakpoint};

/// Prefix marking a spacing prop value as a theme token.
pub const SPACING_TOKEN_PREFIX: &str = "spacing.";

/// Looks up `<namespace>.<raw>` in the theme, falling back to `raw`.
///
/// Only scalar tokens count as matches; a path that lands on a token group
/// (an object) is treated as unresolved.
///
/// ```rust
/// use blade_style::style::{resolve_token, Scalar};
/// use blade_style::Theme;
///
/// let theme = Theme::light();
/// assert_eq!(resolve_token(theme, "border.radius", &"medium".into()), Scalar::from(4));
/// assert_eq!(resolve_token(theme, "border.radius", &"3px".into()), Scalar::from("3px"));
/// ```
pub fn resolve_token(theme: &Theme, namespace: &str, raw: &Scalar) -> Scalar {
    let path = format!("{}.{}", namespace, raw);
    match theme.get(&path).and_then(Scalar::from_token) {
        Some(value) => value,
        None => {
            tracing::trace!(token = %path, "token not in theme, using raw value");
            raw.clone()
        }
    }
}

fn scalar_at(value: Option<&Responsive<PropValue>>, breakpoint: Option<Breakpoint>) -> Option<&Scalar> {
    let value = value?.at(breakpoint)?;
    if value.is_empty() {
        return None;
    }
    match value {
        PropValue::Scalar(scalar) => Some(scalar),
        PropValue::Shorthand(_) => {
            tracing::debug!("shorthand value given to a single-value prop, ignoring");
            None
        }
    }
}

/// Resolves a prop that needs no theme lookup.
///
/// Shorthand sequences are joined with spaces.
pub fn get_raw_value(
    value: Option<&Responsive<PropValue>>,
    breakpoint: Option<Breakpoint>,
) -> Option<Scalar> {
    match value?.at(breakpoint)? {
        PropValue::Scalar(scalar) if !scalar.is_empty() => Some(scalar.clone()),
        PropValue::Scalar(_) => None,
        PropValue::Shorthand(shorthand) => join(
            shorthand
                .values()
                .iter()
                .filter(|s| !s.is_empty())
                .map(Scalar::to_string),
        ),
    }
}

fn join(parts: impl Iterator<Item = String>) -> Option<Scalar> {
    let joined = parts.collect::<Vec<_>>().join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(Scalar::Text(joined))
    }
}

fn spacing_scalar(scalar: &Scalar, theme: &Theme) -> Option<Scalar> {
    if scalar.is_empty() {
        return None;
    }
    match scalar.as_str() {
        Some(token) if token.starts_with(SPACING_TOKEN_PREFIX) => match theme.get(token) {
            Some(value) => {
                let length = make_space(value);
                if length.is_none() {
                    tracing::debug!(token, "spacing token is not a length, omitting");
                }
                length.map(Scalar::Text)
            }
            None => {
                tracing::debug!(token, "spacing token not in theme, using raw value");
                Some(scalar.clone())
            }
        },
        // `auto`, `100%`, `10px`, bare numbers
        _ => Some(scalar.clone()),
    }
}

/// Resolves spacing-like props: padding, margin, sizes, gaps, offsets.
///
/// `spacing.N` tokens become pixel lengths, literals pass through, and
/// shorthand sequences resolve element-wise and are joined with spaces.
///
/// ```rust
/// use blade_style::style::{get_spacing_value, PropValue, Responsive, Scalar, Shorthand};
/// use blade_style::Theme;
///
/// let theme = Theme::light();
/// let margin: Responsive<PropValue> = Shorthand::new(["spacing.1", "auto"]).unwrap().into();
/// assert_eq!(
///     get_spacing_value(Some(&margin), theme, None),
///     Some(Scalar::from("2px auto"))
/// );
/// ```
pub fn get_spacing_value(
    value: Option<&Responsive<PropValue>>,
    theme: &Theme,
    breakpoint: Option<Breakpoint>,
) -> Option<Scalar> {
    match value?.at(breakpoint)? {
        PropValue::Scalar(scalar) => spacing_scalar(scalar, theme),
        PropValue::Shorthand(shorthand) => join(
            shorthand
                .values()
                .iter()
                .filter_map(|s| spacing_scalar(s, theme))
                .map(|s| s.to_string()),
        ),
    }
}

/// Resolves color props against the `colors` namespace.
pub fn get_color_value(
    value: Option<&Responsive<PropValue>>,
    theme: &Theme,
    breakpoint: Option<Breakpoint>,
) -> Option<Scalar> {
    scalar_at(value, breakpoint).map(|scalar| resolve_token(theme, "colors", scalar))
}

fn border_size(namespace: &str, scalar: &Scalar, theme: &Theme) -> Option<Scalar> {
    match resolve_token(theme, namespace, scalar) {
        Scalar::Number(n) => make_border_size(&serde_json::Value::Number(n)).map(Scalar::Text),
        text => Some(text),
    }
}

/// Resolves radius props against `border.radius`; numbers become pixels.
pub fn get_border_radius_value(
    value: Option<&Responsive<PropValue>>,
    theme: &Theme,
    breakpoint: Option<Breakpoint>,
) -> Option<Scalar> {
    scalar_at(value, breakpoint).and_then(|scalar| border_size("border.radius", scalar, theme))
}

/// Resolves width props against `border.width`; numbers become pixels.
pub fn get_border_width_value(
    value: Option<&Responsive<PropValue>>,
    theme: &Theme,
    breakpoint: Option<Breakpoint>,
) -> Option<Scalar> {
    scalar_at(value, breakpoint).and_then(|scalar| border_size("border.width", scalar, theme))
}

/// Resolves an elevation level against `elevation` into a shadow value.
pub fn get_elevation_value(
    value: Option<&Responsive<PropValue>>,
    theme: &Theme,
    breakpoint: Option<Breakpoint>,
) -> Option<Scalar> {
    scalar_at(value, breakpoint).map(|scalar| resolve_token(theme, "elevation", scalar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Shorthand;

    fn theme() -> &'static Theme {
        Theme::light()
    }

    fn v(value: impl Into<Responsive<PropValue>>) -> Responsive<PropValue> {
        value.into()
    }

    #[test]
    fn test_spacing_token_resolves_to_pixels() {
        assert_eq!(
            get_spacing_value(Some(&v("spacing.4")), theme(), None),
            Some(Scalar::from("12px"))
        );
    }

    #[test]
    fn test_spacing_literals_pass_through() {
        for literal in ["auto", "10px", "100%", "calc(100% - 8px)"] {
            assert_eq!(
                get_spacing_value(Some(&v(literal)), theme(), None),
                Some(Scalar::from(literal))
            );
        }
        assert_eq!(
            get_spacing_value(Some(&v(40)), theme(), None),
            Some(Scalar::from(40))
        );
    }

    #[test]
    fn test_spacing_unknown_token_passes_through() {
        assert_eq!(
            get_spacing_value(Some(&v("spacing.99")), theme(), None),
            Some(Scalar::from("spacing.99"))
        );
    }

    #[test]
    fn test_spacing_empty_and_absent_are_omitted() {
        assert_eq!(get_spacing_value(None, theme(), None), None);
        assert_eq!(get_spacing_value(Some(&v("")), theme(), None), None);
        let empty = v(Shorthand::new(["", ""]).unwrap());
        assert_eq!(get_spacing_value(Some(&empty), theme(), None), None);
    }

    #[test]
    fn test_spacing_shorthand_joins_in_order() {
        let margin = v(Shorthand::new(["spacing.1", "spacing.2", "spacing.3", "spacing.4"]).unwrap());
        assert_eq!(
            get_spacing_value(Some(&margin), theme(), None),
            Some(Scalar::from("2px 4px 8px 12px"))
        );
    }

    #[test]
    fn test_spacing_responsive_breakpoint_lookup() {
        let padding = Responsive::from_breakpoints([
            (Breakpoint::Base, PropValue::from("spacing.2")),
            (Breakpoint::M, PropValue::from("spacing.5")),
        ]);
        assert_eq!(
            get_spacing_value(Some(&padding), theme(), None),
            Some(Scalar::from("4px"))
        );
        assert_eq!(
            get_spacing_value(Some(&padding), theme(), Some(Breakpoint::M)),
            Some(Scalar::from("16px"))
        );
        assert_eq!(get_spacing_value(Some(&padding), theme(), Some(Breakpoint::S)), None);
    }

    #[test]
    fn test_spacing_token_with_non_length_value_is_omitted() {
        let theme = Theme::new("t").add("spacing.4.nested", 1);
        assert_eq!(get_spacing_value(Some(&v("spacing.4")), &theme, None), None);
    }

    #[test]
    fn test_color_token_resolves() {
        assert_eq!(
            get_color_value(Some(&v("brand.primary.500")), theme(), None),
            Some(Scalar::from("hsla(218, 89%, 51%, 1)"))
        );
    }

    #[test]
    fn test_color_literal_passes_through() {
        assert_eq!(
            get_color_value(Some(&v("#0d94f5")), theme(), None),
            Some(Scalar::from("#0d94f5"))
        );
    }

    #[test]
    fn test_color_group_path_is_not_a_color() {
        assert_eq!(
            get_color_value(Some(&v("brand.primary")), theme(), None),
            Some(Scalar::from("brand.primary"))
        );
    }

    #[test]
    fn test_border_radius_tokens() {
        assert_eq!(
            get_border_radius_value(Some(&v("medium")), theme(), None),
            Some(Scalar::from("4px"))
        );
        assert_eq!(
            get_border_radius_value(Some(&v("round")), theme(), None),
            Some(Scalar::from("50%"))
        );
        assert_eq!(
            get_border_radius_value(Some(&v("6px")), theme(), None),
            Some(Scalar::from("6px"))
        );
        assert_eq!(get_border_radius_value(Some(&v("")), theme(), None), None);
    }

    #[test]
    fn test_border_width_tokens() {
        assert_eq!(
            get_border_width_value(Some(&v("thinner")), theme(), None),
            Some(Scalar::from("0.5px"))
        );
        assert_eq!(
            get_border_width_value(Some(&v(3)), theme(), None),
            Some(Scalar::from("3px"))
        );
    }

    #[test]
    fn test_elevation_token() {
        assert_eq!(
            get_elevation_value(Some(&v("lowRaised")), theme(), None),
            Some(Scalar::from("0px 2px 16px 0px hsla(217, 56%, 17%, 0.1)"))
        );
    }

    #[test]
    fn test_shorthand_is_ignored_for_single_value_props() {
        let value = v(Shorthand::new(["thin", "thick"]).unwrap());
        assert_eq!(get_border_width_value(Some(&value), theme(), None), None);
    }

    #[test]
    fn test_raw_value_joins_shorthand() {
        let value = v(Shorthand::new([Scalar::from(1), Scalar::from(1), Scalar::from("auto")]).unwrap());
        assert_eq!(get_raw_value(Some(&value), None), Some(Scalar::from("1 1 auto")));
        assert_eq!(get_raw_value(Some(&v("")), None), None);
        assert_eq!(get_raw_value(Some(&v(0)), None), Some(Scalar::from(0)));
    }
}
