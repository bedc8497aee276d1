//! `blade-style amount`: format a currency amount.

use anyhow::{Context, Result};
use blade_style::components::{format_amount, AmountIntent, AmountSuffix, Currency};
use clap::Args;
use serde_json::json;

use super::ThemeArgs;

#[derive(Args, Debug)]
pub struct AmountArgs {
    /// The amount to format
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    #[arg(long, default_value_t = Currency::Inr)]
    pub currency: Currency,

    /// decimals, humanize or none
    #[arg(long, default_value = "decimals")]
    pub suffix: AmountSuffix,

    /// Print JSON including the text color of this intent
    /// (positive, negative, notice, information or neutral)
    #[arg(long)]
    pub intent: Option<AmountIntent>,

    #[command(flatten)]
    pub theme: ThemeArgs,
}

pub fn run(args: &AmountArgs) -> Result<String> {
    let amount = format_amount(args.value, args.currency, args.suffix)
        .with_context(|| format!("cannot format {}", args.value))?;

    match args.intent {
        None => Ok(amount.to_string()),
        Some(intent) => {
            let theme = args.theme.load()?;
            let output = json!({
                "text": amount.to_string(),
                "parts": &amount,
                "color": intent.color(&theme),
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}
