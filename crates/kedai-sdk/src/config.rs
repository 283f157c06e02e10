//! Catalog client configuration.

use anyhow::{Context, Result};
use kedai_commerce::ExchangeRate;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`CatalogConfig::base_url`].
pub const ENV_BASE_URL: &str = "KEDAI_BASE_URL";
/// Environment variable overriding [`CatalogConfig::usd_to_idr`].
pub const ENV_USD_TO_IDR: &str = "KEDAI_USD_TO_IDR";

/// Where the catalog lives and how its prices are converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root of the catalog API, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Rupiah per US dollar.
    #[serde(default = "default_usd_to_idr")]
    pub usd_to_idr: f64,

    /// User-Agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_usd_to_idr() -> f64 {
    ExchangeRate::USD_TO_IDR
}

fn default_user_agent() -> String {
    format!("kedai-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            usd_to_idr: default_usd_to_idr(),
            user_agent: default_user_agent(),
        }
    }
}

impl CatalogConfig {
    /// Load config from a TOML file, or JSON when the path ends in `.json`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Defaults with `KEDAI_*` environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by environment variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }

        if let Some(rate) = lookup(ENV_USD_TO_IDR) {
            self.usd_to_idr = rate
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid {}: {:?}", ENV_USD_TO_IDR, rate))?;
        }

        Ok(self)
    }

    /// The configured USD to IDR rate.
    pub fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate::usd_to_idr(self.usd_to_idr)
    }
}
