//! Period returns and equity curves from closing prices

use crate::error::{FinanceError, Result};

/// Minimum number of prices for a return to be defined
pub const MIN_PRICES: usize = 2;

/// `p[i] / p[i-1] - 1` for each consecutive pair
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// `ln(p[i] / p[i-1])` for each consecutive pair
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// Growth of one unit invested at the first price, compounding the simple returns.
///
/// Same length as `prices`; the first value is always 1.0.
pub fn equity_curve_from_prices(prices: &[f64]) -> Vec<f64> {
    let returns = simple_returns(prices);

    let mut curve = Vec::with_capacity(returns.len() + 1);
    curve.push(1.0);
    for r in returns {
        let last = curve[curve.len() - 1];
        curve.push(last * (1.0 + r));
    }
    curve
}

/// Closing prices in chronological order, at least two of them
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Result<Self> {
        if prices.len() < MIN_PRICES {
            return Err(FinanceError::InsufficientData {
                needed: MIN_PRICES,
                found: prices.len(),
            });
        }
        Ok(Self { prices })
    }

    /// Number of prices, always at least [`MIN_PRICES`]
    pub fn observations(&self) -> usize {
        self.prices.len()
    }

    pub fn simple_returns(&self) -> Vec<f64> {
        simple_returns(&self.prices)
    }

    pub fn log_returns(&self) -> Vec<f64> {
        log_returns(&self.prices)
    }

    pub fn equity_curve(&self) -> Vec<f64> {
        equity_curve_from_prices(&self.prices)
    }

    /// Last price over first price
    pub fn growth_multiple(&self) -> f64 {
        self.prices[self.prices.len() - 1] / self.prices[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_series_eq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(*a, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_simple_returns() {
        assert_series_eq(&simple_returns(&[100.0, 110.0, 121.0]), &[0.10, 0.10]);
    }

    #[test]
    fn test_log_returns() {
        let returns = log_returns(&[100.0, 110.0, 121.0]);
        assert_series_eq(&returns, &[1.1f64.ln(), 1.1f64.ln()]);
    }

    #[test]
    fn test_lengths() {
        let prices = [10.0, 11.0, 9.5, 12.25, 12.0];
        assert_eq!(simple_returns(&prices).len(), prices.len() - 1);
        assert_eq!(log_returns(&prices).len(), prices.len() - 1);

        let curve = equity_curve_from_prices(&prices);
        assert_eq!(curve.len(), prices.len());
        assert_eq!(curve[0], 1.0);
    }

    #[test]
    fn test_equity_curve_tracks_price_ratio() {
        let prices = [100.0, 105.0, 110.25];
        assert_series_eq(&simple_returns(&prices), &[0.05, 0.05]);
        assert_series_eq(&equity_curve_from_prices(&prices), &[1.0, 1.05, 1.1025]);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(simple_returns(&[100.0]).is_empty());
        assert!(log_returns(&[]).is_empty());
        assert_eq!(equity_curve_from_prices(&[100.0]), vec![1.0]);
    }

    #[test]
    fn test_price_series_requires_two_prices() {
        assert!(matches!(
            PriceSeries::new(vec![100.0]),
            Err(FinanceError::InsufficientData { needed: 2, found: 1 })
        ));
        assert!(PriceSeries::new(vec![]).is_err());

        let series = PriceSeries::new(vec![50.0, 75.0]).unwrap();
        assert_eq!(series.observations(), 2);
        assert_abs_diff_eq!(series.growth_multiple(), 1.5, epsilon = 1e-12);
        assert_series_eq(&series.equity_curve(), &[1.0, 1.5]);
    }
}
