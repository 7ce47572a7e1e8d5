use anyhow::{Context, Result};
use clap::Parser;
use keycalc::calculator::copy_to_clipboard;
use keycalc::config::{self, Config, OutputFormat};
use keycalc::session::Session;
use keycalc::ui::{DisplayRenderer, JsonRenderer, TerminalRenderer};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keypad calculator. Each character is a key; `{Enter}`, `{Escape}` and
/// `{Backspace}` spell named keys.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// Evaluate this key sequence and exit instead of reading stdin
    #[arg(short, long)]
    keys: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Copy the final value to the clipboard
    #[arg(long)]
    copy: bool,

    /// Hide the equation line in plain output
    #[arg(long)]
    no_equation: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_equation {
        config.show_equation = false;
    }

    let stdout = io::stdout().lock();
    match config.format {
        OutputFormat::Plain => {
            let renderer = TerminalRenderer::new(stdout, config.show_equation);
            run(&cli, &config, renderer)
        }
        OutputFormat::Json => run(&cli, &config, JsonRenderer::new(stdout)),
    }
}

fn run<R: DisplayRenderer>(cli: &Cli, config: &Config, renderer: R) -> Result<()> {
    let mut session = Session::new(renderer, config.copy_on_equals);

    match &cli.keys {
        Some(keys) => session.feed_line(keys)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read input")?;
                session.feed_line(&line)?;
            }
        }
    }

    if cli.copy {
        copy_to_clipboard(session.engine().display_value())?;
    }

    Ok(())
}
