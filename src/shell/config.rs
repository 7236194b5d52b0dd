//! Shell defaults, overridable from the command line

use std::path::PathBuf;

pub const DEFAULT_PRICES_PATH: &str = "prices.csv";
pub const DEFAULT_PORTFOLIO_PATH: &str = "portfolio.csv";
pub const DEFAULT_SVG_PATH: &str = "equity_curve.svg";

/// Amortization rows shown by the loan command
pub const DEFAULT_PREVIEW_ROWS: usize = 6;

/// Where the equity curve command sends its plot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotTarget {
    /// ASCII chart written to the shell's output
    Terminal,
    /// SVG file at the given path
    Svg(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Used when the prices prompt is left blank
    pub prices_path: PathBuf,
    /// Used when the portfolio prompt is left blank
    pub portfolio_path: PathBuf,
    pub preview_rows: usize,
    pub plot: PlotTarget,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prices_path: PathBuf::from(DEFAULT_PRICES_PATH),
            portfolio_path: PathBuf::from(DEFAULT_PORTFOLIO_PATH),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            plot: PlotTarget::Terminal,
        }
    }
}
