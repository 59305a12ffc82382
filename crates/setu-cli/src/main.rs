mod commands;
mod input;
mod output;
mod store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::assess::AssessArgs;
use commands::compare::CompareArgs;
use commands::emi::EmiArgs;
use commands::history::HistoryArgs;

/// SETU compliance and underwriting calculations
#[derive(Parser)]
#[command(
    name = "setu",
    version,
    about = "Microfinance compliance and borrower eligibility calculations",
    long_about = "A CLI for the SETU calculation engines: RBI 2025 structural \
                  compliance comparison (Section 8 vs NBFC-MFI) with multi-year \
                  asset projection, Annex I borrower eligibility assessment \
                  with FOIR and income-cap checks, EMI calculation, and the \
                  assessment history log."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare structural paths for an institutional snapshot
    Compare(CompareArgs),
    /// Assess borrower eligibility from a profile
    Assess(AssessArgs),
    /// Calculate an equated monthly instalment
    Emi(EmiArgs),
    /// List recent assessment records
    History(HistoryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Assess(args) => commands::assess::run_assess(args),
        Commands::Emi(args) => commands::emi::run_emi(args),
        Commands::History(args) => commands::history::run_history(args),
        Commands::Version => {
            println!("setu {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
