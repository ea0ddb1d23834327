//! Company reference types

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Markets a company can be listed in. Each market fixes the home currency
/// of its companies' figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Market {
    #[default]
    #[serde(rename = "US", alias = "us")]
    UnitedStates,
    #[serde(rename = "AU", alias = "au")]
    Australia,
}

impl Market {
    pub fn code(&self) -> &'static str {
        match self {
            Market::UnitedStates => "US",
            Market::Australia => "AU",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Market::UnitedStates => "United States",
            Market::Australia => "Australia",
        }
    }

    /// ISO 4217 code of the currency figures are reported in.
    pub fn currency(&self) -> &'static str {
        match self {
            Market::UnitedStates => "USD",
            Market::Australia => "AUD",
        }
    }

    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Market::UnitedStates => "$",
            Market::Australia => "A$",
        }
    }
}

impl Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Market {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "US" => Ok(Market::UnitedStates),
            "AU" => Ok(Market::Australia),
            _ => Err(anyhow::anyhow!("Invalid market: {}", s)),
        }
    }
}

/// Directory entry used to find and label a company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub exchange: String,
    pub market: Market,
}

/// Static financial figures for one company.
///
/// `market_cap`, `shares_outstanding`, `annual_revenue` and `annual_profit`
/// are in millions; `quarterly_dividend` is in currency units per share.
/// `shares_outstanding` is always positive for records held by a store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompanySnapshot {
    pub market_cap: f64,
    pub shares_outstanding: f64,
    pub annual_revenue: f64,
    pub annual_profit: f64,
    pub quarterly_dividend: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_from_str() {
        assert_eq!("US".parse::<Market>().unwrap(), Market::UnitedStates);
        assert_eq!(" au ".parse::<Market>().unwrap(), Market::Australia);
        assert!("UK".parse::<Market>().is_err());
    }

    #[test]
    fn test_market_currency() {
        assert_eq!(Market::UnitedStates.currency(), "USD");
        assert_eq!(Market::UnitedStates.currency_symbol(), "$");
        assert_eq!(Market::Australia.currency(), "AUD");
        assert_eq!(Market::Australia.currency_symbol(), "A$");
        assert_eq!(Market::Australia.to_string(), "AU");
    }

    #[test]
    fn test_market_deserialization() {
        let market: Market = serde_yaml::from_str("\"AU\"").unwrap();
        assert_eq!(market, Market::Australia);
        let market: Market = serde_yaml::from_str("us").unwrap();
        assert_eq!(market, Market::UnitedStates);
    }
}
