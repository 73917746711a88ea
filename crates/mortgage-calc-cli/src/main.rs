mod commands;
mod config;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process;

use commands::mortgage::{CalculateArgs, ValidateArgs};

/// Mortgage repayment calculator
#[derive(Parser)]
#[command(
    name = "mortgage-calc",
    version,
    about = "Mortgage repayment calculator",
    long_about = "Calculates the monthly payment and total repayment of a repayment or \
                  interest-only mortgage with decimal precision. Fields left out are \
                  reported as required and no calculation runs."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to the config file, then json)
    #[arg(long, global = true)]
    output: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate monthly and total repayments
    Calculate(CalculateArgs),
    /// Check which required fields are missing
    Validate(ValidateArgs),
    /// Fill in the form line by line and recalculate on demand
    Interactive,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let config = match config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };
    logging::init_logging(cli.verbose, config.log_level.as_deref());

    let format = cli.output.clone().unwrap_or_else(|| config.output.clone());

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::mortgage::run_calculate(args, &config),
        Commands::Validate(args) => commands::mortgage::run_validate(args),
        Commands::Interactive => match commands::interactive::run_interactive(&config) {
            Ok(()) => process::exit(0),
            Err(e) => Err(e),
        },
        Commands::Version => {
            println!("mortgage-calc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&format, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
