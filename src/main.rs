//! Mini Finance Toolkit CLI
//!
//! Interactive menu for compound growth, loans, NPV/IRR, price returns and
//! portfolio snapshots

use anyhow::Result;
use clap::{Parser, ValueEnum};
use mini_finance::shell::{
    PlotTarget, Shell, ShellConfig, DEFAULT_PORTFOLIO_PATH, DEFAULT_PREVIEW_ROWS, DEFAULT_PRICES_PATH,
    DEFAULT_SVG_PATH,
};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlotKind {
    /// ASCII chart in the terminal
    Terminal,
    /// SVG file (see --svg-out)
    Svg,
}

/// Interactive financial calculator
#[derive(Parser)]
#[command(name = "mini_finance", author, version, about, long_about = None)]
struct Cli {
    /// Prices CSV used when the path prompt is left blank
    #[arg(long, default_value = DEFAULT_PRICES_PATH)]
    prices: PathBuf,

    /// Portfolio CSV used when the path prompt is left blank
    #[arg(long, default_value = DEFAULT_PORTFOLIO_PATH)]
    portfolio: PathBuf,

    /// Amortization rows shown by the loan command
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    preview_rows: usize,

    /// Where the equity curve plot goes
    #[arg(long, value_enum, default_value_t = PlotKind::Terminal)]
    plot: PlotKind,

    /// Output file for --plot svg
    #[arg(long, default_value = DEFAULT_SVG_PATH)]
    svg_out: PathBuf,
}

impl Cli {
    fn into_config(self) -> ShellConfig {
        let plot = match self.plot {
            PlotKind::Terminal => PlotTarget::Terminal,
            PlotKind::Svg => PlotTarget::Svg(self.svg_out),
        };

        ShellConfig {
            prices_path: self.prices,
            portfolio_path: self.portfolio,
            preview_rows: self.preview_rows,
            plot,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Cli::parse().into_config();
    log::debug!("Starting shell with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    shell.run()
}
