//! Read-only reference data: company directory and financial snapshots.

use crate::core::company::{Company, CompanySnapshot, Market};
use crate::core::config::AppConfig;
use std::collections::HashMap;
use tracing::debug;

/// Resolves a company id to its financial snapshot.
pub trait CompanyLookup {
    fn get(&self, company_id: &str) -> Option<&CompanySnapshot>;
}

impl CompanyLookup for HashMap<String, CompanySnapshot> {
    fn get(&self, company_id: &str) -> Option<&CompanySnapshot> {
        HashMap::get(self, company_id)
    }
}

/// Reference table built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    companies: Vec<Company>,
    snapshots: HashMap<String, CompanySnapshot>,
}

impl ReferenceStore {
    /// Store seeded with the bundled company data.
    pub fn builtin() -> Self {
        let mut store = Self {
            companies: Vec::new(),
            snapshots: HashMap::new(),
        };
        for (id, name, exchange, market, figures) in BUILTIN_COMPANIES {
            store.insert(
                Company {
                    id: id.to_string(),
                    name: name.to_string(),
                    exchange: exchange.to_string(),
                    market,
                },
                figures,
            );
        }
        store
    }

    /// Built-in data overlaid with the companies from `config`. A configured
    /// company replaces a built-in one with the same id.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut store = Self::builtin();
        for company in &config.companies {
            debug!(id = %company.id, "Adding configured company");
            store.insert(company.company(), company.snapshot());
        }
        store
    }

    fn insert(&mut self, company: Company, snapshot: CompanySnapshot) {
        self.snapshots.insert(company.id.clone(), snapshot);
        match self.companies.iter_mut().find(|c| c.id == company.id) {
            Some(existing) => *existing = company,
            None => self.companies.push(company),
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn company(&self, company_id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == company_id)
    }

    /// Companies listed in `market` whose name or id contains `query`,
    /// ignoring case. An empty query matches every company in the market.
    pub fn search(&self, market: Market, query: &str) -> Vec<&Company> {
        let query = query.trim().to_lowercase();
        self.companies
            .iter()
            .filter(|c| c.market == market)
            .filter(|c| {
                query.is_empty()
                    || c.name.to_lowercase().contains(&query)
                    || c.id.to_lowercase().contains(&query)
            })
            .collect()
    }
}

impl CompanyLookup for ReferenceStore {
    fn get(&self, company_id: &str) -> Option<&CompanySnapshot> {
        self.snapshots.get(company_id)
    }
}

const fn snapshot(
    market_cap: f64,
    shares_outstanding: f64,
    annual_revenue: f64,
    annual_profit: f64,
    quarterly_dividend: f64,
) -> CompanySnapshot {
    CompanySnapshot {
        market_cap,
        shares_outstanding,
        annual_revenue,
        annual_profit,
        quarterly_dividend,
    }
}

// Figures in millions of home currency, dividends per share per quarter.
const BUILTIN_COMPANIES: [(&str, &str, &str, Market, CompanySnapshot); 6] = [
    (
        "AAPL",
        "Apple Inc.",
        "NASDAQ",
        Market::UnitedStates,
        snapshot(2_900_000.0, 15_500.0, 383_900.0, 96_995.0, 0.24),
    ),
    (
        "GOOGL",
        "Alphabet Inc.",
        "NASDAQ",
        Market::UnitedStates,
        snapshot(1_800_000.0, 12_800.0, 307_400.0, 73_800.0, 0.0),
    ),
    (
        "MSFT",
        "Microsoft Corporation",
        "NASDAQ",
        Market::UnitedStates,
        snapshot(3_000_000.0, 7_420.0, 211_900.0, 72_360.0, 0.75),
    ),
    (
        "WOW",
        "Woolworths Group",
        "ASX",
        Market::Australia,
        snapshot(45_000.0, 1_200.0, 64_300.0, 1_620.0, 0.51),
    ),
    (
        "CBA",
        "Commonwealth Bank",
        "ASX",
        Market::Australia,
        snapshot(175_000.0, 1_670.0, 26_380.0, 10_170.0, 1.15),
    ),
    (
        "BHP",
        "BHP Group",
        "ASX",
        Market::Australia,
        snapshot(235_000.0, 5_060.0, 53_820.0, 12_880.0, 0.80),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let store = ReferenceStore::builtin();
        let aapl = store.get("AAPL").expect("AAPL should be bundled");
        assert_eq!(aapl.market_cap, 2_900_000.0);
        assert_eq!(aapl.quarterly_dividend, 0.24);
        assert!(store.get("aapl").is_none());
        assert!(store.get("NOPE").is_none());
    }

    #[test]
    fn test_builtin_shares_outstanding_positive() {
        let store = ReferenceStore::builtin();
        assert_eq!(store.companies().len(), 6);
        for company in store.companies() {
            let snapshot = store.get(&company.id).unwrap();
            assert!(snapshot.shares_outstanding > 0.0, "{}", company.id);
            assert!(snapshot.market_cap > 0.0, "{}", company.id);
        }
    }

    #[test]
    fn test_search_by_market() {
        let store = ReferenceStore::builtin();
        let ids: Vec<_> = store
            .search(Market::Australia, "")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["WOW", "CBA", "BHP"]);
    }

    #[test]
    fn test_search_by_query() {
        let store = ReferenceStore::builtin();

        let by_name = store.search(Market::UnitedStates, "micro");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "MSFT");

        let by_id = store.search(Market::UnitedStates, "googl");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].name, "Alphabet Inc.");

        // Query never crosses markets
        assert!(store.search(Market::Australia, "apple").is_empty());
    }

    #[test]
    fn test_from_config_adds_and_replaces() {
        let config = AppConfig::from_yaml(
            r#"
companies:
  - id: "TSLA"
    name: "Tesla Inc."
    exchange: "NASDAQ"
    market_cap: 800000
    shares_outstanding: 3180
    annual_revenue: 96770
    annual_profit: 14990
  - id: "AAPL"
    name: "Apple Inc."
    exchange: "NASDAQ"
    market_cap: 3000000
    shares_outstanding: 15000
    annual_revenue: 390000
    annual_profit: 95000
    quarterly_dividend: 0.25
"#,
        )
        .unwrap();

        let store = ReferenceStore::from_config(&config);
        assert_eq!(store.companies().len(), 7);
        assert_eq!(store.get("TSLA").unwrap().shares_outstanding, 3180.0);
        assert_eq!(store.get("AAPL").unwrap().quarterly_dividend, 0.25);
        assert_eq!(store.company("TSLA").unwrap().market, Market::UnitedStates);
        // Replaced entries keep their position
        assert_eq!(store.companies()[0].id, "AAPL");
    }

    #[test]
    fn test_hashmap_lookup() {
        let mut table = HashMap::new();
        table.insert("X".to_string(), snapshot(10.0, 1.0, 5.0, 1.0, 0.0));
        assert!(CompanyLookup::get(&table, "X").is_some());
        assert!(CompanyLookup::get(&table, "Y").is_none());
    }
}
