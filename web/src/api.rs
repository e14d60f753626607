//! ==============================================================================
//! api.rs - http client for the shortening backend
//! ==============================================================================

use gloo_net::http::{Request, Response};
use thiserror::Error;
use trimmer_shared::{ShortenRequest, ShortenResponse};

use crate::config::Config;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// backend answered, but not with 200
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// The two calls the page makes to the backend.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET {backend}/`, only used to wake a sleeping host
    async fn ping(&self) -> Result<(), ApiError>;

    /// `POST {backend}/`, resolves to the full short url
    async fn shorten(&self, long_url: &str) -> Result<String, ApiError>;
}

// ==============================================================================
// browser implementation
// ==============================================================================

#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: Config,
}

impl HttpBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn root(&self) -> String {
        format!("{}/", self.config.backend_url())
    }
}

impl Backend for HttpBackend {
    async fn ping(&self) -> Result<(), ApiError> {
        Request::get(&self.root())
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn shorten(&self, long_url: &str) -> Result<String, ApiError> {
        let body = shorten_body(long_url)?;

        let response = Request::post(&self.root())
            .header(CONTENT_TYPE.0, CONTENT_TYPE.1)
            .body(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let code = read_short_code(response).await?;
        Ok(self.config.short_url(&code))
    }
}

const CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

fn shorten_body(long_url: &str) -> Result<String, ApiError> {
    serde_json::to_string(&ShortenRequest::new(long_url)).map_err(|e| ApiError::Encode(e.to_string()))
}

async fn read_short_code(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    if status != 200 {
        return Err(ApiError::Status(status));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    short_code(status, &body)
}

/// Only an exact 200 carrying `{"message": ...}` yields a code.
fn short_code(status: u16, body: &str) -> Result<String, ApiError> {
    if status != 200 {
        return Err(ApiError::Status(status));
    }

    serde_json::from_str::<ShortenResponse>(body)
        .map(|resp| resp.message)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// ==============================================================================
// tests
// ==============================================================================
