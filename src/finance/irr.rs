//! Internal Rate of Return (IRR)
//!
//! Solved in two explicit branches: Newton-Raphson seeded with the caller's
//! guess, then a fixed-iteration bisection on NPV whenever Newton fails.

use super::cashflows::npv;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_IRR_GUESS: f64 = 0.1;

/// |NPV| below which a rate is accepted as the root
const NPV_TOLERANCE: f64 = 1e-7;

const NEWTON_STEP_TOLERANCE: f64 = 1e-10;
const MAX_NEWTON_ITERATIONS: u32 = 100;

const BISECTION_LOW: f64 = -0.99;
const BISECTION_HIGH: f64 = 10.0;
const BISECTION_ITERATIONS: u32 = 200;

/// Which branch produced an IRR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrMethod {
    Newton,
    Bisection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrSolution {
    /// Periodic rate as a decimal (0.05 = 5%)
    pub rate: f64,
    pub method: IrrMethod,
}

/// IRR of `cash_flows` as a periodic rate.
///
/// Never fails: if Newton-Raphson does not produce a root, the bisection
/// fallback always returns a rate. When NPV has no sign change over
/// [-0.99, 10.0] that rate is meaningless.
pub fn irr(cash_flows: &[f64], guess: f64) -> f64 {
    solve_irr(cash_flows, guess).rate
}

/// Same as [`irr`], also reporting which branch found the rate
pub fn solve_irr(cash_flows: &[f64], guess: f64) -> IrrSolution {
    match newton_irr(cash_flows, guess) {
        Some(rate) => {
            debug!("IRR converged by Newton-Raphson at {}", rate);
            IrrSolution { rate, method: IrrMethod::Newton }
        }
        None => {
            debug!("Newton-Raphson failed from guess {}, falling back to bisection", guess);
            IrrSolution {
                rate: bisection_irr(cash_flows),
                method: IrrMethod::Bisection,
            }
        }
    }
}

/// NPV and its derivative with respect to rate
fn npv_and_derivative(cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut slope = 0.0;

    for (t, &cf) in cash_flows.iter().enumerate() {
        value += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            slope -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (value, slope)
}

/// Newton-Raphson on NPV. `None` on any failure: empty input, non-finite
/// values, a vanishing derivative, stepping to a rate <= -100%, or no
/// convergence.
fn newton_irr(cash_flows: &[f64], guess: f64) -> Option<f64> {
    if cash_flows.is_empty() {
        return None;
    }

    let mut rate = guess;

    for _ in 0..MAX_NEWTON_ITERATIONS {
        if !rate.is_finite() || rate <= -1.0 {
            return None;
        }

        let (value, slope) = npv_and_derivative(cash_flows, rate);
        if !value.is_finite() || !slope.is_finite() || slope.abs() < 1e-20 {
            return None;
        }

        let next = rate - value / slope;

        if (next - rate).abs() < NEWTON_STEP_TOLERANCE {
            if next <= -1.0 || npv(next, cash_flows).abs() >= NPV_TOLERANCE {
                return None;
            }
            return Some(next);
        }

        rate = next;
    }

    None
}

/// Bisection on NPV over a fixed bracket.
///
/// Positive NPV moves the lower bound up, anything else moves the upper
/// bound down. Returns the last midpoint once the iterations run out.
fn bisection_irr(cash_flows: &[f64]) -> f64 {
    let mut low = BISECTION_LOW;
    let mut high = BISECTION_HIGH;
    let mut mid = (low + high) / 2.0;

    for _ in 0..BISECTION_ITERATIONS {
        mid = (low + high) / 2.0;
        let value = npv(mid, cash_flows);

        if value.abs() < NPV_TOLERANCE {
            return mid;
        }

        if value > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    warn!(
        "IRR bisection exhausted {} iterations without |NPV| < {}, returning {}",
        BISECTION_ITERATIONS, NPV_TOLERANCE, mid
    );
    mid
}
