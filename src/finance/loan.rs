//! Level-payment loans and their amortization schedules

use crate::error::{FinanceError, Result};
use serde::{Deserialize, Serialize};

/// Monthly payments
pub const MONTHS_PER_YEAR: u32 = 12;

/// Upper bound on materialized schedule rows
pub const MAX_SCHEDULE_PERIODS: u32 = 1_000_000;

/// One period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number (1-indexed)
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Outstanding balance after this payment, never negative
    pub balance: f64,
}

/// Level periodic payment (EMI) for a loan of `principal` over `years`, `m` payments a year.
///
/// A zero periodic rate falls back to straight-line repayment. The period
/// count is kept in `f64`, so very long terms approach `principal * r`
/// instead of overflowing.
pub fn loan_payment(principal: f64, annual_rate: f64, years: u32, m: u32) -> f64 {
    let r = annual_rate / m as f64;
    let n = years as f64 * m as f64;

    if r == 0.0 {
        return principal / n;
    }

    // r(1+r)^n / ((1+r)^n - 1), divided through by (1+r)^n
    principal * r / (1.0 - (1.0 + r).powf(-n))
}

/// Full period-by-period schedule for a level-payment loan.
///
/// The balance is clamped at zero each period, so the final row may carry a
/// tiny residue from floating-point drift rather than an exact zero.
/// Fails with `InvalidArgument` when the term exceeds [`MAX_SCHEDULE_PERIODS`].
pub fn amortization_schedule(principal: f64, annual_rate: f64, years: u32, m: u32) -> Result<Vec<AmortizationRow>> {
    let n = years
        .checked_mul(m)
        .filter(|&n| n <= MAX_SCHEDULE_PERIODS)
        .ok_or_else(|| {
            FinanceError::InvalidArgument(format!(
                "schedule of {} years x {} periods exceeds {} rows",
                years, m, MAX_SCHEDULE_PERIODS
            ))
        })?;
    let payment = loan_payment(principal, annual_rate, years, m);
    let r = annual_rate / m as f64;

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(n as usize);

    for period in 1..=n {
        let interest = balance * r;
        let principal_paid = payment - interest;
        balance = (balance - principal_paid).max(0.0);

        schedule.push(AmortizationRow {
            period,
            payment,
            interest,
            principal: principal_paid,
            balance,
        });
    }

    Ok(schedule)
}

/// Totals over a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub periods: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

impl ScheduleSummary {
    pub fn from_schedule(schedule: &[AmortizationRow]) -> Self {
        Self {
            periods: schedule.len() as u32,
            total_paid: schedule.iter().map(|row| row.payment).sum(),
            total_interest: schedule.iter().map(|row| row.interest).sum(),
            final_balance: schedule.last().map(|row| row.balance).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_payment_positive() {
        let pmt = loan_payment(100_000.0, 0.12, 30, MONTHS_PER_YEAR);
        assert!(pmt > 0.0);
        // Standard 30-year mortgage at 12%: ~1028.61/month
        assert_abs_diff_eq!(pmt, 1028.61, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let pmt = loan_payment(12_000.0, 0.0, 1, MONTHS_PER_YEAR);
        assert_abs_diff_eq!(pmt, 1000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_schedule_shape() {
        let schedule = amortization_schedule(100_000.0, 0.12, 30, MONTHS_PER_YEAR).unwrap();
        assert_eq!(schedule.len(), 360);
        assert_eq!(schedule[0].period, 1);
        assert_eq!(schedule[359].period, 360);
        assert!(schedule.iter().all(|row| row.balance >= 0.0));
        assert_abs_diff_eq!(schedule[359].balance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_first_row_split() {
        let schedule = amortization_schedule(100_000.0, 0.12, 30, MONTHS_PER_YEAR).unwrap();
        let first = &schedule[0];
        // 1% monthly interest on the full balance
        assert_abs_diff_eq!(first.interest, 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal, first.payment - 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.balance, 100_000.0 - first.principal, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_schedule_pays_down() {
        let schedule = amortization_schedule(1200.0, 0.0, 1, MONTHS_PER_YEAR).unwrap();
        assert_eq!(schedule.len(), 12);
        assert!(schedule.iter().all(|row| row.interest == 0.0));
        assert_abs_diff_eq!(schedule[5].balance, 600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule[11].balance, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_summary_totals() {
        let schedule = amortization_schedule(10_000.0, 0.06, 2, MONTHS_PER_YEAR).unwrap();
        let summary = ScheduleSummary::from_schedule(&schedule);
        assert_eq!(summary.periods, 24);
        assert_abs_diff_eq!(summary.total_paid, schedule[0].payment * 24.0, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.total_interest, summary.total_paid - 10_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.final_balance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_long_term_payment_approaches_interest_only() {
        // Period count overflows u32 and i32; payment tends to principal * r
        let pmt = loan_payment(1000.0, 0.05, 400_000_000, MONTHS_PER_YEAR);
        assert_abs_diff_eq!(pmt, 1000.0 * 0.05 / 12.0, epsilon = 1e-9);

        let pmt = loan_payment(1000.0, 0.05, 250_000_000, MONTHS_PER_YEAR);
        assert_abs_diff_eq!(pmt, 4.1667, epsilon = 1e-4);
    }

    #[test]
    fn test_oversized_schedule_rejected() {
        assert!(matches!(
            amortization_schedule(1000.0, 0.05, 400_000_000, MONTHS_PER_YEAR),
            Err(FinanceError::InvalidArgument(_))
        ));
        assert!(amortization_schedule(1000.0, 0.05, MAX_SCHEDULE_PERIODS / 12 + 1, MONTHS_PER_YEAR).is_err());
        assert!(amortization_schedule(1000.0, 0.05, MAX_SCHEDULE_PERIODS / 12, MONTHS_PER_YEAR).is_ok());
    }
}
