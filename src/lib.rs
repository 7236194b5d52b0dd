//! Mini Finance Toolkit - standard financial computations for a terminal session
//!
//! This library provides:
//! - Compound growth, level-payment loans and amortization schedules
//! - Cash-flow valuation (NPV, IRR with a bisection fallback)
//! - Simple/log returns and normalized equity curves from price series
//! - CSV readers for portfolio holdings and price series
//! - The interactive menu shell used by the `mini_finance` binary

pub mod error;
pub mod finance;
pub mod data;
pub mod shell;

// Re-export commonly used types
pub use error::{FinanceError, Result};
pub use finance::{AmortizationRow, IrrMethod, IrrSolution, PriceSeries};
pub use data::{PortfolioHolding, PortfolioSnapshot};
pub use shell::{Shell, ShellConfig};
