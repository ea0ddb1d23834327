use crate::core::company::{Company, CompanySnapshot, Market};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// A company supplied through the config file. Adds to, or replaces, the
/// built-in reference data.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CompanyConfig {
    pub id: String,
    pub name: String,
    pub exchange: String,
    #[serde(default)]
    pub market: Market,
    pub market_cap: f64,
    pub shares_outstanding: f64,
    pub annual_revenue: f64,
    pub annual_profit: f64,
    #[serde(default)]
    pub quarterly_dividend: f64,
}

impl CompanyConfig {
    pub fn company(&self) -> Company {
        Company {
            id: self.id.clone(),
            name: self.name.clone(),
            exchange: self.exchange.clone(),
            market: self.market,
        }
    }

    pub fn snapshot(&self) -> CompanySnapshot {
        CompanySnapshot {
            market_cap: self.market_cap,
            shares_outstanding: self.shares_outstanding,
            annual_revenue: self.annual_revenue,
            annual_profit: self.annual_profit,
            quarterly_dividend: self.quarterly_dividend,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            bail!("Company '{}' has an empty id", self.name);
        }
        let figures = [
            ("market_cap", self.market_cap),
            ("shares_outstanding", self.shares_outstanding),
            ("annual_revenue", self.annual_revenue),
            ("annual_profit", self.annual_profit),
            ("quarterly_dividend", self.quarterly_dividend),
        ];
        if let Some((field, _)) = figures.iter().find(|(_, v)| !v.is_finite()) {
            bail!("Company {}: {field} must be a finite number", self.id);
        }
        if self.market_cap <= 0.0 {
            bail!("Company {}: market_cap must be positive", self.id);
        }
        if self.shares_outstanding <= 0.0 {
            bail!("Company {}: shares_outstanding must be positive", self.id);
        }
        if self.annual_revenue < 0.0 {
            bail!("Company {}: annual_revenue must not be negative", self.id);
        }
        if self.quarterly_dividend < 0.0 {
            bail!("Company {}: quarterly_dividend must not be negative", self.id);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Market listed by `companies` when none is given.
    #[serde(default)]
    pub market: Market,
    #[serde(default)]
    pub companies: Vec<CompanyConfig>,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "shareslice", "shareslice")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_yaml(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Parses and validates a config document. Company ids are upper-cased.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(yaml)?;
        for company in &mut config.companies {
            company.id = company.id.trim().to_uppercase();
            company.validate()?;
        }
        debug!(
            companies = config.companies.len(),
            "Successfully loaded config"
        );
        Ok(config)
    }
}
