//! Modal fields for one country.

use super::model::{Country, CurrentWeather};
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

const SUNNY: &str = "☀️";
const CLOUDY: &str = "☁️";
const UNKNOWN_ICON: &str = "❓";
const UNKNOWN_VALUE: &str = "-";

/// Weather codes below this are drawn as clear sky.
const CLEAR_SKY_BELOW: u32 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub name: String,
    pub region: String,
    pub flag: Option<String>,
    pub flag_alt: String,
    pub capital: String,
    pub population: String,
    pub languages: String,
    pub currencies: String,
    pub weather: WeatherView,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub temperature: String,
    pub wind: String,
    pub icon: String,
}

impl WeatherView {
    pub fn unknown() -> Self {
        Self {
            temperature: UNKNOWN_VALUE.to_string(),
            wind: UNKNOWN_VALUE.to_string(),
            icon: UNKNOWN_ICON.to_string(),
        }
    }
}

impl From<&CurrentWeather> for WeatherView {
    fn from(w: &CurrentWeather) -> Self {
        let icon = if w.weathercode < CLEAR_SKY_BELOW { SUNNY } else { CLOUDY };
        Self {
            temperature: w.temperature.to_string(),
            wind: w.windspeed.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl CountryDetail {
    /// Fields from the in-memory record; weather starts out unknown.
    pub fn from_country(country: &Country) -> Self {
        let name = country.name.common.clone();
        let region = match (non_empty(&country.region), non_empty(&country.subregion)) {
            (Some(r), Some(s)) => format!("{} — {}", r, s),
            (Some(r), None) => r.to_string(),
            (None, Some(s)) => s.to_string(),
            (None, None) => NOT_AVAILABLE.to_string(),
        };

        let languages = country.language_names();
        let currencies: Vec<String> = country
            .currency_list()
            .into_iter()
            .filter_map(|c| match (c.name, c.symbol) {
                (Some(name), Some(symbol)) => Some(format!("{} ({})", name, symbol)),
                (Some(name), None) => Some(name),
                (None, Some(symbol)) => Some(symbol),
                (None, None) => None,
            })
            .collect();

        Self {
            flag_alt: country
                .flags
                .alt
                .clone()
                .unwrap_or_else(|| format!("Flag of {}", name)),
            flag: country.flag_url().map(str::to_string),
            capital: country.first_capital().unwrap_or(NOT_AVAILABLE).to_string(),
            population: country
                .population
                .map(group_thousands)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            languages: join_or_na(&languages),
            currencies: join_or_na(&currencies),
            weather: WeatherView::unknown(),
            region,
            name,
        }
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.trim().is_empty())
}

fn join_or_na(items: &[String]) -> String {
    if items.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        items.join(", ")
    }
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_by_three() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(38_005_238), "38,005,238");
        assert_eq!(group_thousands(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn weather_icon_threshold() {
        let clear = CurrentWeather { temperature: 21.5, windspeed: 7.2, weathercode: 2 };
        let view = WeatherView::from(&clear);
        assert_eq!(view.icon, SUNNY);
        assert_eq!(view.temperature, "21.5");
        assert_eq!(view.wind, "7.2");

        let overcast = CurrentWeather { temperature: 4.0, windspeed: 30.0, weathercode: 3 };
        let view = WeatherView::from(&overcast);
        assert_eq!(view.icon, CLOUDY);
        assert_eq!(view.temperature, "4");
    }

    #[test]
    fn unknown_weather_placeholders() {
        let view = WeatherView::unknown();
        assert_eq!((view.temperature.as_str(), view.wind.as_str(), view.icon.as_str()), ("-", "-", "❓"));
    }
}
