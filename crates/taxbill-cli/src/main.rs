mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::bill::BillArgs;
use commands::discount::DiscountArgs;
use commands::fine::FineArgs;
use commands::tax::TaxArgs;

/// Municipal tariff bill calculations
#[derive(Parser)]
#[command(
    name = "taxbill",
    version,
    about = "Municipal tariff bill calculations",
    long_about = "A CLI for municipal tariff billing with decimal precision. \
                  Assesses house/maintenance/drainage tax on a base tariff, \
                  applies the tiered discount, and computes late-payment \
                  fines and the final payable amount."
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
    /// Assess tax components and total tax on a base tariff
    Tax(TaxArgs),
    /// Apply the tiered discount to a total tax
    Discount(DiscountArgs),
    /// Assess the late-payment fine and final payable amount
    Fine(FineArgs),
    /// Run the full billing pipeline (tax, discount, fine)
    Bill(BillArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Tax(args) => commands::tax::run_tax(args),
        Commands::Discount(args) => commands::discount::run_discount(args),
        Commands::Fine(args) => commands::fine::run_fine(args),
        Commands::Bill(args) => commands::bill::run_bill(args),
        Commands::Version => {
            println!("taxbill {}", env!("CARGO_PKG_VERSION"));
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
