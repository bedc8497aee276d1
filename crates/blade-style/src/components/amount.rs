//! Amount: currency formatting with locale-specific digit grouping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::{resolve_token, Scalar, StyleError};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "MYR")]
    Myr,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Myr => "RM",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Myr => "MYR",
        }
    }

    /// Compact-notation steps, smallest first.
    fn compact_units(self) -> &'static [(f64, &'static str)] {
        match self {
            Currency::Inr => &[(1e3, "K"), (1e5, "L"), (1e7, "Cr")],
            Currency::Myr => &[(1e3, "K"), (1e6, "M"), (1e9, "B")],
        }
    }

    fn group(self, digits: &str) -> String {
        match self {
            Currency::Inr => group_indian(digits),
            Currency::Myr => group_western(digits),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "MYR" => Ok(Currency::Myr),
            _ => Err(format!("unsupported currency '{}' (expected INR or MYR)", s)),
        }
    }
}

/// How the fractional part of an amount is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountSuffix {
    /// Two fraction digits.
    #[default]
    Decimals,
    /// Compact notation such as `1.2L` or `3M`.
    Humanize,
    /// Integer part only.
    None,
}

impl FromStr for AmountSuffix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decimals" => Ok(AmountSuffix::Decimals),
            "humanize" => Ok(AmountSuffix::Humanize),
            "none" => Ok(AmountSuffix::None),
            other => Err(format!(
                "unknown suffix '{}' (expected decimals, humanize or none)",
                other
            )),
        }
    }
}

/// The semantic color of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountIntent {
    Positive,
    Negative,
    Notice,
    Information,
    #[default]
    Neutral,
}

impl AmountIntent {
    pub fn color_token(self) -> &'static str {
        match self {
            AmountIntent::Positive => "feedback.text.positive.lowContrast",
            AmountIntent::Negative => "feedback.text.negative.lowContrast",
            AmountIntent::Notice => "feedback.text.notice.lowContrast",
            AmountIntent::Information => "feedback.text.information.lowContrast",
            AmountIntent::Neutral => "feedback.text.neutral.lowContrast",
        }
    }

    /// The intent's text color in `theme`.
    pub fn color(self, theme: &Theme) -> String {
        resolve_token(theme, "colors", &Scalar::from(self.color_token())).to_string()
    }
}

impl FromStr for AmountIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(AmountIntent::Positive),
            "negative" => Ok(AmountIntent::Negative),
            "notice" => Ok(AmountIntent::Notice),
            "information" => Ok(AmountIntent::Information),
            "neutral" => Ok(AmountIntent::Neutral),
            other => Err(format!("unknown intent '{}'", other)),
        }
    }
}

/// A formatted amount, split into the parts a renderer styles separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedAmount {
    pub symbol: &'static str,
    pub number: String,
    pub suffix: Option<&'static str>,
}

impl fmt::Display for FormattedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.symbol, self.number, self.suffix.unwrap_or(""))
    }
}

/// Formats `value` for display in `currency`.
///
/// ```rust
/// use blade_style::components::{format_amount, AmountSuffix, Currency};
///
/// let lakhs = format_amount(1234567.891, Currency::Inr, AmountSuffix::Decimals).unwrap();
/// assert_eq!(lakhs.to_string(), "₹ 12,34,567.89");
///
/// let compact = format_amount(1234567.891, Currency::Myr, AmountSuffix::Humanize).unwrap();
/// assert_eq!(compact.to_string(), "RM 1.2M");
/// ```
pub fn format_amount(
    value: f64,
    currency: Currency,
    suffix: AmountSuffix,
) -> Result<FormattedAmount, StyleError> {
    if !value.is_finite() {
        return Err(StyleError::NonFiniteAmount(value));
    }
    let magnitude = value.abs();

    let (number, compact) = match suffix {
        AmountSuffix::Decimals => {
            let fixed = format!("{:.2}", magnitude);
            let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
            (format!("{}.{}", currency.group(int), frac), None)
        }
        AmountSuffix::None => (currency.group(&format!("{:.0}", magnitude.trunc())), None),
        AmountSuffix::Humanize => humanize(magnitude, currency),
    };

    // A negative amount that rounds to zero is shown unsigned.
    let is_zero = !number.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    Ok(FormattedAmount {
        symbol: currency.symbol(),
        number: format!("{}{}", sign, number),
        suffix: compact,
    })
}

/// Picks the compact unit after rounding, so `999_999` becomes `1M`
/// rather than `1000K`.
fn humanize(magnitude: f64, currency: Currency) -> (String, Option<&'static str>) {
    let mut divisor = 1.0;
    let mut label = None;
    for &(threshold, unit) in currency.compact_units() {
        if round_to_tenth(magnitude / divisor) * divisor < threshold {
            break;
        }
        divisor = threshold;
        label = Some(unit);
    }
    (one_fraction_digit(round_to_tenth(magnitude / divisor)), label)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn one_fraction_digit(value: f64) -> String {
    let s = format!("{:.1}", value);
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

/// `1234567` becomes `1,234,567`.
fn group_western(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1234567` becomes `12,34,567`: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}
