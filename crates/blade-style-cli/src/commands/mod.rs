//! CLI command definitions and dispatch.

mod amount;
mod resolve;
mod token;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blade_style::{AdaptiveTheme, ColorScheme, Theme, ThemeChoice};
use clap::{Args, Parser, Subcommand};

/// Resolve design-system style props against a theme.
#[derive(Parser, Debug)]
#[command(name = "blade-style", version, about)]
pub struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a props file into a style object
    Resolve(resolve::ResolveArgs),
    /// Look up a single token in the theme
    Token(token::TokenArgs),
    /// Format a currency amount
    Amount(amount::AmountArgs),
}

/// Theme selection shared by the theme-aware commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ThemeArgs {
    /// Theme file (.json, .yaml or .yml); the built-in themes are used if omitted
    #[arg(long, env = "BLADE_THEME")]
    pub theme: Option<PathBuf>,

    /// Built-in color scheme (light or dark); detected from the OS if omitted
    #[arg(long)]
    pub scheme: Option<ColorScheme>,
}

impl ThemeArgs {
    pub fn load(&self) -> Result<Theme> {
        match &self.theme {
            Some(path) => load_theme_file(path),
            None => {
                let adaptive = AdaptiveTheme::builtin();
                let choice = match self.scheme {
                    Some(scheme) => ThemeChoice::Scheme(&adaptive, scheme),
                    None => ThemeChoice::Adaptive(&adaptive),
                };
                let theme = choice.resolve().clone();
                tracing::debug!(theme = theme.name(), "using built-in theme");
                Ok(theme)
            }
        }
    }
}

fn load_theme_file(path: &Path) -> Result<Theme> {
    let theme = Theme::from_file(path)
        .with_context(|| format!("failed to load theme from {}", path.display()))?;
    theme
        .validate()
        .with_context(|| format!("invalid theme in {}", path.display()))?;
    Ok(theme)
}

/// Runs a parsed command line, returning what should be printed.
pub fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Resolve(args) => resolve::run(&args),
        Command::Token(args) => token::run(&args),
        Command::Amount(args) => amount::run(&args),
    }
}
