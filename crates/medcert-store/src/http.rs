//! # Hosted-Service HTTP Client
//!
//! Production [`CatalogStore`] implementation against the hosted
//! relational data service's REST surface. One resource collection per
//! endpoint:
//!
//! - `GET /certificates`
//! - `GET /categories`
//! - `GET /products`
//! - `GET /activity_log?order=timestamp.desc&limit=N`
//!
//! ## Error Handling
//!
//! Transport failures are retried with exponential backoff (see
//! [`crate::retry`]); non-2xx statuses and decode failures are mapped to
//! [`StoreError`] with the endpoint path, HTTP status, and a response
//! body excerpt for diagnostics. The client never interprets "not found"
//! — an absent row is simply absent from the returned collection.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use medcert_core::{ActivityLogEntry, Category, Certificate, Product};

use crate::config::{ConfigError, StoreConfig};
use crate::error::StoreError;
use crate::retry::retry_send;
use crate::CatalogStore;

/// HTTP client for the hosted data service.
///
/// Cheap to clone is not a goal — share it behind an `Arc` like every
/// other [`CatalogStore`] implementation.
#[derive(Debug)]
pub struct HttpCatalogStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogStore {
    /// Build a client from configuration.
    ///
    /// Fails if the api key cannot be encoded as an HTTP header value or
    /// the underlying client cannot be constructed.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut auth = reqwest::header::HeaderValue::from_str(&format!(
            "Bearer {}",
            config.api_key.expose()
        ))
        .map_err(|_| ConfigError::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Http {
                endpoint: "client construction".to_string(),
                source: e,
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Fetch a collection endpoint and decode the JSON array.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, StoreError> {
        let url = format!("{}/{path}", self.base_url);

        let resp = retry_send(|| self.client.get(&url).query(query).send())
            .await
            .map_err(|e| StoreError::Http {
                endpoint: path.to_string(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        resp.json().await.map_err(|e| StoreError::Deserialization {
            endpoint: path.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl CatalogStore for HttpCatalogStore {
    async fn fetch_certificates(&self) -> Result<Vec<Certificate>, StoreError> {
        self.get_json("certificates", &[]).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.get_json("categories", &[]).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        self.get_json("products", &[]).await
    }

    async fn fetch_activity_log(
        &self,
        limit: usize,
    ) -> Result<Vec<ActivityLogEntry>, StoreError> {
        self.get_json(
            "activity_log",
            &[
                ("order", "timestamp.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }
}
