//! [`InventoryApi`] over HTTP, using [`reqwest`].

use std::future::Future;

use serde::de::DeserializeOwned;

use stockroom_domain::dashboard::DashboardStats;
use stockroom_domain::filter::ItemFilter;
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, ItemUpdate, NewItem};

use crate::api::InventoryApi;
use crate::error::RequestError;
use crate::query::encode_filter;

/// Base URL used when none is configured: the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "STOCKROOM_API_URL";

/// HTTP client for one stockroom backend.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryApi {
    /// Create a client for the API rooted at `base_url`, e.g.
    /// `http://localhost:8000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Create a client for the URL in `STOCKROOM_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_json<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, RequestError> {
        let response = Self::ensure_success(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Pass a 2xx response through; turn anything else into a
    /// [`RequestError`] built from its body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RequestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        tracing::debug!(%status, url = %response.url(), "non-success response");
        let body = response.bytes().await.unwrap_or_default();
        Err(RequestError::from_error_body(&body))
    }
}

impl InventoryApi for HttpInventoryApi {
    fn fetch_dashboard(
        &self,
    ) -> impl Future<Output = Result<DashboardStats, RequestError>> + Send {
        let request = self.client.get(self.url("/dashboard"));
        Self::send_json(request)
    }

    fn fetch_items(
        &self,
        filter: &ItemFilter,
    ) -> impl Future<Output = Result<Vec<Item>, RequestError>> + Send {
        let request = self
            .client
            .get(self.url(&format!("/items{}", encode_filter(filter))));
        Self::send_json(request)
    }

    fn fetch_item(&self, id: ItemId) -> impl Future<Output = Result<Item, RequestError>> + Send {
        let request = self.client.get(self.url(&format!("/items/{id}")));
        Self::send_json(request)
    }

    fn create_item(
        &self,
        payload: NewItem,
    ) -> impl Future<Output = Result<Item, RequestError>> + Send {
        let request = self.client.post(self.url("/items")).json(&payload);
        Self::send_json(request)
    }

    fn update_item(
        &self,
        id: ItemId,
        payload: ItemUpdate,
    ) -> impl Future<Output = Result<Item, RequestError>> + Send {
        let request = self
            .client
            .put(self.url(&format!("/items/{id}")))
            .json(&payload);
        Self::send_json(request)
    }

    fn delete_item(&self, id: ItemId) -> impl Future<Output = Result<(), RequestError>> + Send {
        let request = self.client.delete(self.url(&format!("/items/{id}")));
        async move {
            Self::ensure_success(request.send().await?).await?;
            Ok(())
        }
    }

    fn fetch_locations(&self) -> impl Future<Output = Result<Vec<String>, RequestError>> + Send {
        let request = self.client.get(self.url("/locations"));
        Self::send_json(request)
    }
}
