use crate::adapters::format::decode_json;
use crate::core::{CatalogSource, PartsLookup, Record};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        })
}

async fn get_json_array(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
    name_field: &str,
) -> Result<Vec<Record>> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).query(query).send().await?;
    let status = response.status();
    tracing::debug!("API response status: {}", status);

    if !status.is_success() {
        return Err(CatalogError::HttpStatusError {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    decode_json(&body, name_field)
}

/// Catalog endpoint of the shop backend returning a JSON array.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: String,
    name_field: String,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, name_field: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, name_field, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        name_field: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: build_client(timeout),
            endpoint: endpoint.into(),
            name_field: name_field.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Record>> {
        get_json_array(&self.client, &self.endpoint, &[], &self.name_field).await
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.endpoint)
    }
}

/// Parts search on the stock service: `GET <endpoint>?search=<query>`.
#[derive(Debug, Clone)]
pub struct HttpPartsLookup {
    client: Client,
    endpoint: String,
}

impl HttpPartsLookup {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PartsLookup for HttpPartsLookup {
    async fn lookup(&self, query: &str) -> Result<Vec<Record>> {
        get_json_array(&self.client, &self.endpoint, &[("search", query)], "name").await
    }
}
