//! Discounted cash-flow valuation

/// Net present value of `cash_flows` at a constant periodic `discount_rate`.
///
/// `cash_flows[0]` is the flow at t=0 (typically the negative outlay) and is
/// not discounted.
pub fn npv(discount_rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + discount_rate).powi(t as i32))
        .sum()
}
