use super::model::{Meal, MealsResponse};
use crate::config::{parse_url, ConfigError, MealsConfig};
use crate::error::FetchResult;
use crate::http::{endpoint, HttpSource};
use crate::input::SearchQuery;
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub struct MealsApi {
    http: Arc<dyn HttpSource>,
    base: Url,
}

impl MealsApi {
    pub fn new(http: Arc<dyn HttpSource>, config: &MealsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http,
            base: parse_url("meals.api_url", &config.api_url)?,
        })
    }

    pub fn search_url(&self, query: &SearchQuery) -> FetchResult<Url> {
        let mut url = endpoint(&self.base, &["search.php"])?;
        url.query_pairs_mut().append_pair("s", query.as_str());
        Ok(url)
    }

    pub fn lookup_url(&self, id: &str) -> FetchResult<Url> {
        let mut url = endpoint(&self.base, &["lookup.php"])?;
        url.query_pairs_mut().append_pair("i", id);
        Ok(url)
    }

    pub fn random_url(&self) -> FetchResult<Url> {
        endpoint(&self.base, &["random.php"])
    }

    pub async fn search(&self, query: &SearchQuery) -> FetchResult<Vec<Meal>> {
        let meals = self.fetch(self.search_url(query)?).await?;
        debug!(query = %query, count = meals.len(), "meals fetched");
        Ok(meals)
    }

    /// Full record for `id`, `None` when the API knows no such meal.
    pub async fn lookup(&self, id: &str) -> FetchResult<Option<Meal>> {
        Ok(self.fetch(self.lookup_url(id)?).await?.into_iter().next())
    }

    pub async fn random(&self) -> FetchResult<Option<Meal>> {
        Ok(self.fetch(self.random_url()?).await?.into_iter().next())
    }

    async fn fetch(&self, url: Url) -> FetchResult<Vec<Meal>> {
        let body = self.http.get_json(url).await?;
        let response: MealsResponse = serde_json::from_value(body)?;
        Ok(response.meals.unwrap_or_default())
    }
}
