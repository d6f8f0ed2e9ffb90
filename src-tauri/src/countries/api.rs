use super::model::{Country, CurrentWeather, ForecastResponse};
use crate::config::{parse_url, ConfigError, CountriesConfig};
use crate::error::FetchResult;
use crate::http::{endpoint, HttpSource};
use crate::input::SearchQuery;
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub struct CountriesApi {
    http: Arc<dyn HttpSource>,
    countries_base: Url,
    weather_base: Url,
}

impl CountriesApi {
    pub fn new(http: Arc<dyn HttpSource>, config: &CountriesConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http,
            countries_base: parse_url("countries.api_url", &config.api_url)?,
            weather_base: parse_url("countries.weather_url", &config.weather_url)?,
        })
    }

    pub fn search_url(&self, query: &SearchQuery) -> FetchResult<Url> {
        endpoint(&self.countries_base, &["name", query.as_str()])
    }

    pub fn weather_url(&self, lat: f64, lon: f64) -> FetchResult<Url> {
        let mut url = endpoint(&self.weather_base, &["forecast"])?;
        url.query_pairs_mut()
            .append_pair("latitude", &lat.to_string())
            .append_pair("longitude", &lon.to_string())
            .append_pair("current_weather", "true");
        Ok(url)
    }

    /// Countries whose name matches `query`.
    pub async fn search(&self, query: &SearchQuery) -> FetchResult<Vec<Country>> {
        let body = self.http.get_json(self.search_url(query)?).await?;
        let countries: Option<Vec<Country>> = serde_json::from_value(body)?;
        let countries = countries.unwrap_or_default();
        debug!(query = %query, count = countries.len(), "countries fetched");
        Ok(countries)
    }

    pub async fn weather(&self, lat: f64, lon: f64) -> FetchResult<CurrentWeather> {
        let body = self.http.get_json(self.weather_url(lat, lon)?).await?;
        let forecast: ForecastResponse = serde_json::from_value(body)?;
        Ok(forecast.current_weather)
    }
}
