//! Terminal presentation of reference data and ownership results

pub mod companies;
pub mod company;
pub mod setup;
pub mod slice;
pub mod ui;

/// Tickers are stored upper-case.
pub(crate) fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}
