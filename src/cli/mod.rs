use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::application;
use crate::io::{InputFormat, import_entries};

/// Tabula - ledger entry formatter
#[derive(Parser)]
#[command(name = "tabula")]
#[command(about = "Render ledger entries as a fixed-width, locale-aware table")]
#[command(version)]
pub struct Cli {
    /// Currency code: USD or EUR
    #[arg(short, long, default_value = "USD")]
    pub currency: String,

    /// Locale code: en-US or nl-NL
    #[arg(short, long, default_value = "en-US")]
    pub locale: String,

    /// Entries file with date, description and amount (in cents); stdin if omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input format: csv, json (default: from the file extension, csv for stdin)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let format = match (&self.format, &self.input) {
            (Some(name), _) => name.parse::<InputFormat>()?,
            (None, Some(path)) => InputFormat::from_path(path),
            (None, None) => InputFormat::default(),
        };

        let reader: Box<dyn Read> = match &self.input {
            Some(path) => Box::new(
                File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?,
            ),
            None => Box::new(io::stdin().lock()),
        };

        let entries = import_entries(reader, format).context("Failed to read entries")?;
        let table = application::format(&self.currency, &self.locale, &entries)?;
        tracing::info!(
            rows = entries.len(),
            currency = %self.currency,
            locale = %self.locale,
            "rendered ledger"
        );

        println!("{}", table);
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
