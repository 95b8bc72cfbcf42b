use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, RETRY_AFTER, USER_AGENT};
use tracing::debug;
use url::Url;

use super::retry::RetryPolicy;
use super::types::{TmdbPagedResponse, TmdbStatusBody};
use crate::backends::CatalogError;
use crate::config::{CatalogConfig, NetworkConfig};
use crate::models::{CategoryKey, CategoryPage};

const CLIENT_USER_AGENT: &str = concat!("marquee/", env!("CARGO_PKG_VERSION"));

fn standard_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    headers
}

/// Thin HTTP layer over the TMDB v3 list and search endpoints.
#[derive(Debug, Clone)]
pub struct TmdbApi {
    client: Client,
    base_url: Url,
    api_key: String,
    language: Option<String>,
    retry: RetryPolicy,
}

impl TmdbApi {
    pub fn new(catalog: &CatalogConfig, network: &NetworkConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(network.timeout())
            .default_headers(standard_headers())
            .build()
            .map_err(CatalogError::from_reqwest)?;

        let base_url = Url::parse(catalog.api_base_url.trim_end_matches('/')).map_err(|e| {
            CatalogError::Other(format!("Invalid API base URL {}: {}", catalog.api_base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Other(format!(
                "API base URL {} cannot hold a path",
                catalog.api_base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            api_key: catalog.api_key.clone(),
            language: catalog.language.clone(),
            retry: RetryPolicy::with_max_retries(network.max_retries),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// `{base}/movie/popular?api_key=…`, `{base}/search/tv?api_key=…&query=…`
    pub fn endpoint(&self, key: &CategoryKey) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            match key {
                CategoryKey::Browse(category) => {
                    segments.push(category.kind().api_segment()).push(category.slug());
                }
                CategoryKey::Search { kind, .. } => {
                    segments.push("search").push(kind.api_segment());
                }
            }
        }

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            if let Some(language) = &self.language {
                query.append_pair("language", language);
            }
            if let CategoryKey::Search { keyword, .. } = key {
                query.append_pair("query", keyword);
            }
        }
        url
    }

    pub async fn fetch_page(&self, key: &CategoryKey) -> Result<CategoryPage, CatalogError> {
        let url = self.endpoint(key);
        let operation = url.path().to_string();
        debug!("Fetching {}", operation);

        let response = self
            .retry
            .execute(&operation, || self.get_once(url.clone()))
            .await?;

        debug!(
            "{}: page {} of {}, {} results",
            operation,
            response.page,
            response.total_pages,
            response.results.len()
        );
        Ok(response.into())
    }

    async fn get_once(&self, url: Url) -> Result<TmdbPagedResponse, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CatalogError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TmdbStatusBody>(&body)
                .map(TmdbStatusBody::describe)
                .unwrap_or(body);
            return Err(CatalogError::from_status(status.as_u16(), message, retry_after));
        }

        let body = response.text().await.map_err(CatalogError::from_reqwest)?;
        Ok(serde_json::from_str(&body)?)
    }
}
