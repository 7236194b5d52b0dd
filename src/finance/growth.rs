//! Compound interest growth

use crate::error::{FinanceError, Result};

/// Annual compounding
pub const DEFAULT_COMPOUNDING: i32 = 1;

/// Future value of `principal` after `years` at `annual_rate`, compounded `m` times a year.
///
/// Only the compounding frequency is validated; negative principals or
/// horizons are computed literally.
pub fn future_value(principal: f64, annual_rate: f64, years: f64, m: i32) -> Result<f64> {
    if m <= 0 {
        return Err(FinanceError::InvalidArgument(format!(
            "compounding frequency must be positive, got {}",
            m
        )));
    }

    let periodic_rate = annual_rate / m as f64;
    Ok(principal * (1.0 + periodic_rate).powf(m as f64 * years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_annual_compounding() {
        let fv = future_value(1000.0, 0.10, 2.0, DEFAULT_COMPOUNDING).unwrap();
        assert_abs_diff_eq!(fv, 1210.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monthly_compounding_beats_annual() {
        let annual = future_value(1000.0, 0.08, 10.0, 1).unwrap();
        let monthly = future_value(1000.0, 0.08, 10.0, 12).unwrap();
        assert!(monthly > annual);
        // 1000 * (1 + 0.08/12)^120
        assert_abs_diff_eq!(monthly, 2219.64, epsilon = 0.01);
    }

    #[test]
    fn test_non_positive_frequency_rejected() {
        assert!(matches!(
            future_value(1000.0, 0.1, 1.0, 0),
            Err(FinanceError::InvalidArgument(_))
        ));
        assert!(future_value(1000.0, 0.1, 1.0, -4).is_err());
    }

    #[test]
    fn test_negative_inputs_computed_literally() {
        let fv = future_value(-500.0, 0.10, 1.0, 1).unwrap();
        assert_abs_diff_eq!(fv, -550.0, epsilon = 1e-9);

        let fv = future_value(1210.0, 0.10, -2.0, 1).unwrap();
        assert_abs_diff_eq!(fv, 1000.0, epsilon = 1e-9);
    }
}
