//! Portfolio holdings: `ticker,shares,price`

use super::{csv_reader, map_csv_error, open_csv, READER_ORIGIN};
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw CSV row; columns are matched by header name, in any order
#[derive(Debug, Deserialize)]
struct CsvRow {
    ticker: String,
    shares: f64,
    price: f64,
}

impl CsvRow {
    fn into_holding(self) -> PortfolioHolding {
        PortfolioHolding {
            value: self.shares * self.price,
            ticker: self.ticker,
            shares: self.shares,
            price: self.price,
        }
    }
}

/// A single position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHolding {
    pub ticker: String,
    pub shares: f64,
    pub price: f64,
    /// shares * price
    pub value: f64,
}

/// Load holdings from a CSV file, in file order
pub fn read_portfolio_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PortfolioHolding>> {
    let path = path.as_ref();
    let reader = open_csv(path)?;
    collect_holdings(reader, &path.display().to_string())
}

/// Load holdings from any reader (e.g., string buffer)
pub fn read_portfolio_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<PortfolioHolding>> {
    collect_holdings(csv_reader(reader), READER_ORIGIN)
}

fn collect_holdings<R: std::io::Read>(mut reader: csv::Reader<R>, origin: &str) -> Result<Vec<PortfolioHolding>> {
    let mut holdings = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result.map_err(|e| map_csv_error(origin, e))?;
        holdings.push(row.into_holding());
    }

    debug!("Loaded {} holdings from {}", holdings.len(), origin);
    Ok(holdings)
}

/// Holdings with their aggregate value and weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub holdings: Vec<PortfolioHolding>,
}

impl PortfolioSnapshot {
    pub fn new(holdings: Vec<PortfolioHolding>) -> Self {
        Self { holdings }
    }

    pub fn total_value(&self) -> f64 {
        self.holdings.iter().map(|h| h.value).sum()
    }

    /// Share of total value held in `holding`; zero for an empty or zero-valued portfolio
    pub fn weight(&self, holding: &PortfolioHolding) -> f64 {
        let total = self.total_value();
        if total == 0.0 {
            0.0
        } else {
            holding.value / total
        }
    }

    /// (holding, weight) pairs in file order
    pub fn weighted(&self) -> impl Iterator<Item = (&PortfolioHolding, f64)> + '_ {
        self.holdings.iter().map(move |h| (h, self.weight(h)))
    }
}
