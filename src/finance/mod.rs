//! Finance math: compound growth, loans, cash-flow valuation and price returns
//!
//! Every function here is pure and works on plain `f64` slices.

mod growth;
mod loan;
mod cashflows;
mod irr;
mod returns;

pub use growth::{future_value, DEFAULT_COMPOUNDING};
pub use loan::{loan_payment, amortization_schedule, AmortizationRow, ScheduleSummary, MAX_SCHEDULE_PERIODS, MONTHS_PER_YEAR};
pub use cashflows::npv;
pub use irr::{irr, solve_irr, IrrMethod, IrrSolution, DEFAULT_IRR_GUESS};
pub use returns::{simple_returns, log_returns, equity_curve_from_prices, PriceSeries, MIN_PRICES};
