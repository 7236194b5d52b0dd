//! CSV readers for portfolio holdings and price series

mod portfolio;
mod prices;

pub use portfolio::{read_portfolio_csv, read_portfolio_from_reader, PortfolioHolding, PortfolioSnapshot};
pub use prices::{read_prices_csv, read_prices_from_reader, read_price_series};

use crate::error::FinanceError;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Label used in errors when reading from something other than a file
const READER_ORIGIN: &str = "<reader>";

fn open_csv(path: &Path) -> Result<csv::Reader<File>, FinanceError> {
    let file = File::open(path).map_err(|source| FinanceError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv_reader(file))
}

fn csv_reader<R: std::io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// I/O failures stay `FileAccess`; everything else the csv crate reports is a format problem
fn map_csv_error(origin: &str, err: csv::Error) -> FinanceError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => FinanceError::FileAccess {
            path: PathBuf::from(origin),
            source,
        },
        _ => FinanceError::Format {
            path: origin.to_string(),
            reason,
        },
    }
}
