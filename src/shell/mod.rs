//! Interactive menu shell
//!
//! Reads line-based input, dispatches to the finance math and CSV readers,
//! and prints rounded results. Each command runs inside its own error
//! boundary: a bad number or a missing file is reported and the menu comes
//! back. Only failures on the terminal itself end the session.

mod config;
pub mod plot;

pub use config::{
    PlotTarget, ShellConfig, DEFAULT_PORTFOLIO_PATH, DEFAULT_PREVIEW_ROWS, DEFAULT_PRICES_PATH,
    DEFAULT_SVG_PATH,
};
pub use plot::{plotter_for, CurvePlotter, SvgPlotter, TerminalPlotter};

use crate::data::{read_portfolio_csv, read_prices_csv, PortfolioSnapshot};
use crate::finance::{
    amortization_schedule, equity_curve_from_prices, future_value, irr, loan_payment, log_returns, npv,
    simple_returns, ScheduleSummary, DEFAULT_IRR_GUESS, MONTHS_PER_YEAR,
};
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

pub const MENU: &str = "
Mini Finance Toolkit
1) Future value (compound interest)
2) Loan payment (EMI) + amortization schedule
3) NPV & IRR of cash flows
4) Returns from prices (simple & log)
5) Portfolio snapshot from CSV
6) Plot equity curve from returns (optional)
0) Exit
Choose: ";

/// Returns shown per series by the returns command
const RETURNS_PREVIEW: usize = 5;

const PLOT_TITLE: &str = "Equity Curve (normalized)";

pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
    plotter: Box<dyn CurvePlotter>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        let plotter = plotter_for(&config.plot);
        Self::with_plotter(input, output, config, plotter)
    }

    pub fn with_plotter(input: R, output: W, config: ShellConfig, plotter: Box<dyn CurvePlotter>) -> Self {
        Self {
            input,
            output,
            config,
            plotter,
        }
    }

    /// Run the menu until `0` or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let choice = match self.read_line()? {
                Some(line) => line,
                None => {
                    writeln!(self.output, "\nBye!")?;
                    return Ok(());
                }
            };

            let outcome = match choice.trim() {
                "1" => self.future_value_command(),
                "2" => self.loan_command(),
                "3" => self.cash_flow_command(),
                "4" => self.returns_command(),
                "5" => self.portfolio_command(),
                "6" => self.plot_command(),
                "0" => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    continue;
                }
            };

            if let Err(err) = outcome {
                // The terminal is gone; nothing more can be shown
                if err.downcast_ref::<std::io::Error>().is_some() {
                    return Err(err);
                }
                log::debug!("command failed: {:?}", err);
                writeln!(self.output, "Error: {:#}", err)?;
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| anyhow!("unexpected end of input"))
    }

    fn prompt_parse<T>(&mut self, message: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let text = self.prompt(message)?;
        parse_value(&text)
    }

    /// Blank answers fall back to `default`
    fn prompt_path(&mut self, message: &str, default: PathBuf) -> Result<PathBuf> {
        let text = self.prompt(message)?;
        let text = text.trim();
        Ok(if text.is_empty() { default } else { PathBuf::from(text) })
    }

    fn future_value_command(&mut self) -> Result<()> {
        let principal: f64 = self.prompt_parse("Initial amount: ")?;
        let rate: f64 = self.prompt_parse("Annual rate (e.g., 0.08 for 8%): ")?;
        let years: i32 = self.prompt_parse("Years: ")?;
        let frequency: i32 = self.prompt_parse("Compounds per year (e.g., 12): ")?;

        let fv = future_value(principal, rate, years as f64, frequency)?;
        writeln!(self.output, "Future value: {:.2}", fv)?;
        Ok(())
    }

    fn loan_command(&mut self) -> Result<()> {
        let loan: f64 = self.prompt_parse("Loan amount: ")?;
        let annual_rate: f64 = self.prompt_parse("Annual rate (e.g., 0.09): ")?;
        let years: u32 = self.prompt_parse("Years: ")?;

        let payment = loan_payment(loan, annual_rate, years, MONTHS_PER_YEAR);
        writeln!(self.output, "Monthly payment: {:.2}", payment)?;

        let answer = self.prompt(&format!(
            "Show first {} lines of amortization? (y/n): ",
            self.config.preview_rows
        ))?;
        if answer.trim().to_lowercase().starts_with('y') {
            let schedule = amortization_schedule(loan, annual_rate, years, MONTHS_PER_YEAR)?;
            for row in schedule.iter().take(self.config.preview_rows) {
                writeln!(
                    self.output,
                    "period={} payment={:.2} interest={:.2} principal={:.2} balance={:.2}",
                    row.period, row.payment, row.interest, row.principal, row.balance
                )?;
            }

            let summary = ScheduleSummary::from_schedule(&schedule);
            writeln!(
                self.output,
                "Over {} payments: total paid {:.2}, total interest {:.2}, final balance {:.2}",
                summary.periods, summary.total_paid, summary.total_interest, summary.final_balance
            )?;
        }
        Ok(())
    }

    fn cash_flow_command(&mut self) -> Result<()> {
        let text = self.prompt("Enter cash flows separated by commas (e.g., -1000,300,400,500):\n")?;
        let cash_flows = text
            .split(',')
            .map(parse_value::<f64>)
            .collect::<Result<Vec<_>>>()?;
        let discount_rate: f64 = self.prompt_parse("Discount rate (e.g., 0.1): ")?;

        writeln!(self.output, "NPV: {:.2}", npv(discount_rate, &cash_flows))?;
        writeln!(self.output, "IRR (approx): {:.4}", irr(&cash_flows, DEFAULT_IRR_GUESS))?;
        Ok(())
    }

    fn returns_command(&mut self) -> Result<()> {
        let path = self.prompt_path(
            &format!("Path to prices CSV (default {}): ", self.config.prices_path.display()),
            self.config.prices_path.clone(),
        )?;
        let prices = read_prices_csv(&path)?;

        writeln!(self.output, "Simple returns: {} ...", format_preview(&simple_returns(&prices)))?;
        writeln!(self.output, "Log returns: {} ...", format_preview(&log_returns(&prices)))?;
        Ok(())
    }

    fn portfolio_command(&mut self) -> Result<()> {
        let path = self.prompt_path(
            &format!("Path to portfolio CSV (default {}): ", self.config.portfolio_path.display()),
            self.config.portfolio_path.clone(),
        )?;
        let snapshot = PortfolioSnapshot::new(read_portfolio_csv(&path)?);

        writeln!(self.output, "Total portfolio value: {:.2}", snapshot.total_value())?;
        for (holding, weight) in snapshot.weighted() {
            writeln!(
                self.output,
                "{}: {} @ {} -> {:.2} (w={:.2}%)",
                holding.ticker,
                holding.shares,
                holding.price,
                holding.value,
                weight * 100.0
            )?;
        }
        Ok(())
    }

    /// Plot failures are reported here and never reach the menu's error boundary
    fn plot_command(&mut self) -> Result<()> {
        let path = self.prompt_path(
            &format!("Path to prices CSV (default {}): ", self.config.prices_path.display()),
            self.config.prices_path.clone(),
        )?;

        let result = read_prices_csv(&path)
            .map_err(anyhow::Error::from)
            .and_then(|prices| {
                let curve = equity_curve_from_prices(&prices);
                self.plotter.plot(PLOT_TITLE, &curve, &mut self.output)
            });

        if let Err(err) = result {
            writeln!(self.output, "Plot failed: {:#}", err)?;
        }
        Ok(())
    }
}

fn parse_value<T>(text: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text = text.trim();
    text.parse::<T>()
        .with_context(|| format!("could not parse '{}'", text))
}

fn format_preview(values: &[f64]) -> String {
    let shown: Vec<String> = values
        .iter()
        .take(RETURNS_PREVIEW)
        .map(|v| format!("{:.6}", v))
        .collect();
    format!("[{}]", shown.join(", "))
}
