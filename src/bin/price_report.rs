//! Non-interactive report for a prices CSV
//!
//! Prints simple returns, log returns and the normalized equity curve.
//! Use --json for machine-readable output.

use anyhow::{Context, Result};
use clap::Parser;
use mini_finance::data::read_price_series;
use serde::Serialize;
use std::path::PathBuf;

/// Returns and equity curve for a `date,price` CSV
#[derive(Parser)]
#[command(name = "price_report", version, about, long_about = None)]
struct Args {
    /// Prices CSV with `date,price` columns
    path: PathBuf,

    /// Emit a JSON document instead of text
    #[arg(long)]
    json: bool,

    /// Only show the first N values of each series
    #[arg(long)]
    head: Option<usize>,
}

#[derive(Serialize)]
struct PriceReport {
    observations: usize,
    growth_multiple: f64,
    simple_returns: Vec<f64>,
    log_returns: Vec<f64>,
    equity_curve: Vec<f64>,
}

fn truncate(mut values: Vec<f64>, head: Option<usize>) -> Vec<f64> {
    if let Some(n) = head {
        values.truncate(n);
    }
    values
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let series = read_price_series(&args.path)
        .with_context(|| format!("loading prices from {}", args.path.display()))?;

    let report = PriceReport {
        observations: series.observations(),
        growth_multiple: series.growth_multiple(),
        simple_returns: truncate(series.simple_returns(), args.head),
        log_returns: truncate(series.log_returns(), args.head),
        equity_curve: truncate(series.equity_curve(), args.head),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Prices: {} observations from {}", report.observations, args.path.display());
    println!("Growth multiple: {:.4}", report.growth_multiple);
    println!();
    println!("{:>6} {:>12} {:>12} {:>12}", "Period", "Simple", "Log", "Equity");
    println!("{}", "-".repeat(45));

    for (t, value) in report.equity_curve.iter().enumerate() {
        // Returns start at period 1; period 0 is the base of the curve
        let (simple, log) = if t == 0 {
            (String::from("-"), String::from("-"))
        } else {
            (
                format!("{:.6}", report.simple_returns[t - 1]),
                format!("{:.6}", report.log_returns[t - 1]),
            )
        };
        println!("{:>6} {:>12} {:>12} {:>12.6}", t, simple, log, value);
    }

    Ok(())
}
