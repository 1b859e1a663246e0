mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::ledger::{MetricsArgs, ReportArgs};

/// Real-estate investment metrics from named line items
#[derive(Parser)]
#[command(
    name = "rei",
    version,
    about = "Real-estate investment metrics from named line items",
    long_about = "Computes monthly income, expenses, cash flow, and cash-on-cash \
                  ROI for a rental property from named income / expense / \
                  initial-cost line items, and renders a two-panel console report. \
                  Tax, rehab, and closing-cost entries are derived from a purchase \
                  price via configured ratios."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for metric commands
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the two-panel investment report
    Report(ReportArgs),
    /// Compute the derived metrics (income, expenses, cash flow, ROI)
    Metrics(MetricsArgs),
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

    let result: Result<Option<serde_json::Value>, Box<dyn std::error::Error>> = match cli.command {
        Commands::Report(args) => commands::ledger::run_report(args),
        Commands::Metrics(args) => commands::ledger::run_metrics(args),
        Commands::Version => {
            println!("rei {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(Some(value)) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        // `report` writes its own plain-text output and returns no value
        Ok(None) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
