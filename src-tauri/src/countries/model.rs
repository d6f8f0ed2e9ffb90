//! Wire types for REST Countries and Open-Meteo.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: Option<u64>,
    /// Language code → language name, in API order.
    #[serde(default)]
    pub languages: Option<Map<String, Value>>,
    /// Currency code → `{name, symbol}`, in API order.
    #[serde(default)]
    pub currencies: Option<Map<String, Value>>,
    #[serde(default, rename = "capitalInfo")]
    pub capital_info: Option<CapitalInfo>,
    #[serde(default)]
    pub latlng: Option<Vec<f64>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CountryName {
    pub common: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Flags {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CapitalInfo {
    #[serde(default)]
    pub latlng: Option<Vec<f64>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Currency {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl Country {
    pub fn flag_url(&self) -> Option<&str> {
        self.flags.svg.as_deref().or(self.flags.png.as_deref())
    }

    pub fn first_capital(&self) -> Option<&str> {
        self.capital
            .as_ref()
            .and_then(|c| c.first())
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// Capital coordinates, falling back to the country's own.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let capital = self.capital_info.as_ref().and_then(|c| c.latlng.as_deref());
        capital
            .and_then(pair)
            .or_else(|| self.latlng.as_deref().and_then(pair))
    }

    pub fn language_names(&self) -> Vec<String> {
        self.languages
            .iter()
            .flat_map(|m| m.values())
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    pub fn currency_list(&self) -> Vec<Currency> {
        self.currencies
            .iter()
            .flat_map(|m| m.values())
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect()
    }
}

fn pair(latlng: &[f64]) -> Option<(f64, f64)> {
    match latlng {
        [lat, lon, ..] => Some((*lat, *lon)),
        _ => None,
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: u32,
}
