//! # API crate — HTTP client for the Data Service
//!
//! The backend that stores registrations is an external service; this crate
//! is the only place that knows it speaks HTTP. [`HttpDataService`] implements
//! [`registration::DataService`] with `reqwest`, which runs on native targets
//! and, through the browser's `fetch`, on `wasm32`.
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | `register` | `POST {base}/api/v1/data/register`, JSON body = `FormState` | any 2xx; the body is logged and otherwise ignored |
//! | `list_records` | `GET {base}/api/v1/data/getdata` | 2xx with a `{ status, data }` JSON body |
//!
//! Requests are sent once. There is no retry and no timeout beyond the
//! transport's own defaults.

use registration::config::ServiceConfig;
use registration::service::{LIST_PATH, REGISTER_PATH};
use registration::{DataService, FormState, RecordsResponse, ServiceError};

mod error;
pub use error::ApiError;
use error::check_success;

#[derive(Clone, Debug)]
pub struct HttpDataService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDataService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_register(&self, form: &FormState) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(REGISTER_PATH))
            .json(form)
            .send()
            .await?;
        let response = check_success(response).await?;
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("register response: {}", body);
        Ok(())
    }

    async fn get_records(&self) -> Result<RecordsResponse, ApiError> {
        let response = self
            .http
            .get(self.url(LIST_PATH))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let response = check_success(response).await?;
        Ok(response.json::<RecordsResponse>().await?)
    }
}

impl DataService for HttpDataService {
    async fn register(&self, form: &FormState) -> Result<(), ServiceError> {
        self.post_register(form).await.map_err(ServiceError::from)
    }

    async fn list_records(&self) -> Result<RecordsResponse, ServiceError> {
        self.get_records().await.map_err(ServiceError::from)
    }
}
