//! Application configuration: hardcoded defaults, optional TOML file, env overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "lookout.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid URL for {key}: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub countries: CountriesConfig,
    pub meals: MealsConfig,
    pub input: InputConfig,
    pub http: HttpConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CountriesConfig {
    pub api_url: String,
    pub weather_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MealsConfig {
    pub api_url: String,
    pub display_limit: usize,
    pub featured_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub debounce_ms: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            countries: CountriesConfig::default(),
            meals: MealsConfig::default(),
            input: InputConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for CountriesConfig {
    fn default() -> Self {
        Self {
            api_url: "https://restcountries.com/v3.1".to_string(),
            weather_url: "https://api.open-meteo.com/v1".to_string(),
        }
    }
}

impl Default for MealsConfig {
    fn default() -> Self {
        Self {
            api_url: "https://www.themealdb.com/api/json/v1/1".to_string(),
            display_limit: 5,
            featured_count: 5,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("lookout/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `path` if it exists, then the process environment
    /// (including a `.env` file when present).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let mut config = if path.exists() {
            info!(path = %path.display(), "loading config file");
            Self::from_toml(&std::fs::read_to_string(path)?)?
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        dotenv::dotenv().ok();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Overlay `LOOKOUT_*` variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LOOKOUT_COUNTRIES_URL") {
            self.countries.api_url = v;
        }
        if let Some(v) = lookup("LOOKOUT_WEATHER_URL") {
            self.countries.weather_url = v;
        }
        if let Some(v) = lookup("LOOKOUT_MEALS_URL") {
            self.meals.api_url = v;
        }
        if let Some(v) = lookup("LOOKOUT_DEBOUNCE_MS") {
            self.input.debounce_ms = parse_number("LOOKOUT_DEBOUNCE_MS", &v)?;
        }
        if let Some(v) = lookup("LOOKOUT_MEAL_LIMIT") {
            self.meals.display_limit = parse_number("LOOKOUT_MEAL_LIMIT", &v)?;
        }
        if let Some(v) = lookup("LOOKOUT_FEATURED_COUNT") {
            self.meals.featured_count = parse_number("LOOKOUT_FEATURED_COUNT", &v)?;
        }
        if let Some(v) = lookup("LOOKOUT_TIMEOUT_SECS") {
            self.http.timeout_secs = parse_number("LOOKOUT_TIMEOUT_SECS", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_url("countries.api_url", &self.countries.api_url)?;
        parse_url("countries.weather_url", &self.countries.weather_url)?;
        parse_url("meals.api_url", &self.meals.api_url)?;
        if self.meals.display_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "meals.display_limit",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.input.debounce_ms)
    }
}

/// Parse a base URL, rejecting ones that cannot carry path segments.
pub fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        key,
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            key,
            reason: format!("{} cannot be a base", raw),
        });
    }
    Ok(url)
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
