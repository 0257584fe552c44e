mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use regform::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version, about = "Registration form - render, validate and replay", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = regform::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the standalone HTML page with an empty form
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Leave out the live validation script
        #[arg(long)]
        no_script: bool,
    },

    /// Validate a JSON snapshot of form values
    Validate {
        /// JSON file with the values, or "-" for stdin
        input: PathBuf,

        /// Evaluate age rules as of this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Apply a recorded list of change/blur/submit events
    Replay {
        /// JSON file holding an array of events, or "-" for stdin
        input: PathBuf,

        /// Evaluate age rules as of this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Serve the page and the wasm package for local preview
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    regform::age::parse_dob(s).ok_or_else(|| format!("expected YYYY-MM-DD, got '{}'", s))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Render { out, no_script } => {
            commands::render::execute(&config, out.as_deref(), no_script)?;
        }
        Commands::Validate { input, today } => {
            commands::validate::execute(&input, today)?;
        }
        Commands::Replay { input, today } => {
            commands::replay::execute(&input, today)?;
        }
        Commands::Serve { port } => {
            commands::serve::execute(&config, port)?;
        }
    }

    Ok(())
}
