//! HTTP client for the Aleph document backend.
//!
//! Provides a minimal client with `ApiKey` auth, generic GET/POST/PUT helpers,
//! and domain methods (collection lookup, create, update, ingest). Errors are
//! classified as transient or permanent so callers can retry with
//! [`with_retries`] under the client's [`RetryPolicy`].

pub mod api;
pub mod backend;
pub mod error;
pub mod retry;

use dokukratie_core::ImportConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub use backend::DocumentBackend;
pub use error::{ApiError, ApiResult};
pub use retry::{with_retries, RetryPolicy};

/// API version prefix of every backend route.
pub const API_PREFIX: &str = "/api/2";

/// HTTP client for the Aleph API.
#[derive(Clone, Debug)]
pub struct AlephClient {
    client: Client,
    base_url: String,
    api_key: String,
    retry: RetryPolicy,
}

impl AlephClient {
    pub fn new(
        base_url: String,
        api_key: String,
        retry: RetryPolicy,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            retry,
        })
    }

    /// Create client from the importer configuration (ALEPHCLIENT_HOST,
    /// ALEPHCLIENT_API_KEY, ALEPHCLIENT_RETRIES).
    pub fn from_config(config: &ImportConfig) -> ApiResult<Self> {
        Self::new(
            config.aleph_host.clone(),
            config.aleph_api_key.clone(),
            RetryPolicy::from_config(config),
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retries(&self) -> u32 {
        self.retry.retries
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("Authorization", format!("ApiKey {}", self.api_key))
    }

    /// Send a prepared request and deserialize the JSON response.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ApiResult<T> {
        let request = self.apply_auth(request);

        let response = request.send().await.map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET request with optional query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let mut request = self.client.get(self.build_url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(self.client.post(self.build_url(path)).json(body))
            .await
    }

    /// PUT JSON body and deserialize response.
    pub async fn put_json<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(self.client.put(self.build_url(path)).json(body))
            .await
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let mut request = self.client.post(self.build_url(path)).multipart(form);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await
    }
}
