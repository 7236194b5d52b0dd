//! Price series: `date,price`

use super::{csv_reader, map_csv_error, open_csv, READER_ORIGIN};
use crate::error::{FinanceError, Result};
use crate::finance::{PriceSeries, MIN_PRICES};
use log::debug;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvRow {
    /// Required column, never interpreted
    #[serde(rename = "date")]
    _date: String,
    price: f64,
}

/// Closing prices from a CSV file, in file order
pub fn read_prices_csv<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let reader = open_csv(path)?;
    collect_prices(reader, &path.display().to_string())
}

/// Closing prices from any reader (e.g., string buffer)
pub fn read_prices_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<f64>> {
    collect_prices(csv_reader(reader), READER_ORIGIN)
}

/// Load a validated [`PriceSeries`] from a CSV file
pub fn read_price_series<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
    PriceSeries::new(read_prices_csv(path)?)
}

fn collect_prices<R: std::io::Read>(mut reader: csv::Reader<R>, origin: &str) -> Result<Vec<f64>> {
    let mut prices = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result.map_err(|e| map_csv_error(origin, e))?;
        prices.push(row.price);
    }

    if prices.len() < MIN_PRICES {
        return Err(FinanceError::InsufficientData {
            needed: MIN_PRICES,
            found: prices.len(),
        });
    }

    debug!("Loaded {} prices from {}", prices.len(), origin);
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::{equity_curve_from_prices, simple_returns};
    use approx::assert_abs_diff_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_prices_in_file_order() {
        let data = "date,price\n2024-01-02,100\n2024-01-03,105\n2024-01-04,110.25\n";
        let prices = read_prices_from_reader(data.as_bytes()).unwrap();
        assert_eq!(prices, vec![100.0, 105.0, 110.25]);
    }

    #[test]
    fn test_returns_from_loaded_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "date,price").unwrap();
        writeln!(file, "2024-01-02,100").unwrap();
        writeln!(file, "2024-01-03,105").unwrap();
        writeln!(file, "2024-01-04,110.25").unwrap();
        file.flush().unwrap();

        let prices = read_prices_csv(file.path()).unwrap();

        let returns = simple_returns(&prices);
        assert_abs_diff_eq!(returns[0], 0.05, epsilon = 1e-9);
        assert_abs_diff_eq!(returns[1], 0.05, epsilon = 1e-9);

        let curve = equity_curve_from_prices(&prices);
        assert_abs_diff_eq!(curve[0], 1.0);
        assert_abs_diff_eq!(curve[1], 1.05, epsilon = 1e-9);
        assert_abs_diff_eq!(curve[2], 1.1025, epsilon = 1e-9);
    }

    #[test]
    fn test_single_row_is_insufficient() {
        let err = read_prices_from_reader("date,price\n2024-01-02,100\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FinanceError::InsufficientData { needed: 2, found: 1 }));
    }

    #[test]
    fn test_header_only_is_insufficient() {
        let err = read_prices_from_reader("date,price\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FinanceError::InsufficientData { found: 0, .. }));
    }

    #[test]
    fn test_date_column_required() {
        let err = read_prices_from_reader("price\n100\n101\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FinanceError::Format { .. }), "got {:?}", err);
    }

    #[test]
    fn test_date_not_validated() {
        let prices = read_prices_from_reader("date,price\nyesterday,1\n,2\n".as_bytes()).unwrap();
        assert_eq!(prices, vec![1.0, 2.0]);
    }

    #[test]
    fn test_bad_price_is_format_error() {
        let err = read_prices_from_reader("date,price\nd1,100\nd2,n/a\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FinanceError::Format { .. }), "got {:?}", err);
    }

    #[test]
    fn test_missing_file() {
        let err = read_price_series("no_such_prices.csv").unwrap_err();
        assert!(matches!(err, FinanceError::FileAccess { .. }));
    }
}
