//! `blade-style` command-line entry point.

mod commands;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use crate::commands::{run, Cli};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            std::process::exit(1);
        }
    }
}
