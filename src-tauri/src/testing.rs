//! In-memory doubles for the HTTP seam and the render surface.

use crate::error::{FetchError, FetchResult};
use crate::http::HttpSource;
use crate::render::{Patch, ResultsView, Surface};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

struct Route {
    needle: String,
    response: FetchResult<Value>,
    delay: Duration,
}

/// Answers requests whose URL contains a registered needle; records every URL.
#[derive(Default)]
pub struct MockSource {
    routes: Mutex<Vec<Route>>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, needle: &str, body: Value) -> Self {
        self.route(needle, Ok(body), Duration::ZERO)
    }

    pub fn fail(self, needle: &str, err: FetchError) -> Self {
        self.route(needle, Err(err), Duration::ZERO)
    }

    pub fn respond_after(self, needle: &str, body: Value, delay: Duration) -> Self {
        self.route(needle, Ok(body), delay)
    }

    fn route(self, needle: &str, response: FetchResult<Value>, delay: Duration) -> Self {
        self.routes.lock().unwrap().push(Route {
            needle: needle.to_string(),
            response,
            delay,
        });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_matching(&self, needle: &str) -> usize {
        self.calls().iter().filter(|u| u.contains(needle)).count()
    }
}

#[async_trait]
impl HttpSource for MockSource {
    async fn get_json(&self, url: Url) -> FetchResult<Value> {
        self.calls.lock().unwrap().push(url.to_string());
        let (response, delay) = {
            let routes = self.routes.lock().unwrap();
            match routes.iter().find(|r| url.as_str().contains(&r.needle)) {
                Some(route) => (route.response.clone(), route.delay),
                None => (Err(FetchError::Status(404)), Duration::ZERO),
            }
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    patches: Mutex<Vec<Patch>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patches(&self) -> Vec<Patch> {
        self.patches.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.patches.lock().unwrap().clear();
    }

    pub fn last_results(&self) -> Option<ResultsView> {
        self.patches().into_iter().rev().find_map(|p| match p {
            Patch::Results(view) => Some(view),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn apply(&self, patch: Patch) {
        self.patches.lock().unwrap().push(patch);
    }
}
