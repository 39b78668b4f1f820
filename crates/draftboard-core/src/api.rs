// HTTP client for the draft-assistant backend.
//
// `DraftApi` is the seam the workflow talks to; `HttpDraftApi` is the
// reqwest implementation used by the binary. Tests substitute scripted
// implementations.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::player::{Player, SuggestionBundle};

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

pub const STATUS_PATH: &str = "/api/status";
pub const REFRESH_PATH: &str = "/api/refresh";
pub const PLAYERS_PATH: &str = "/api/players";
pub const SUGGESTIONS_PATH: &str = "/api/suggestions";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid backend URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// DraftApi
// ---------------------------------------------------------------------------

/// The four backend calls the dashboard makes.
#[async_trait]
pub trait DraftApi: Send + Sync {
    /// Readiness probe. `Ok` only for a 2xx response.
    async fn status(&self) -> Result<(), ApiError>;

    /// Ask the backend to recompute rankings. The acknowledgement body must
    /// be JSON but its contents are ignored.
    async fn refresh(&self) -> Result<(), ApiError>;

    /// Full player list in backend order.
    async fn players(&self) -> Result<Vec<Player>, ApiError>;

    /// Current suggestion bundle.
    async fn suggestions(&self) -> Result<SuggestionBundle, ApiError>;
}

// ---------------------------------------------------------------------------
// HttpDraftApi
// ---------------------------------------------------------------------------

/// reqwest-backed `DraftApi`.
pub struct HttpDraftApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpDraftApi {
    /// Build a client for the backend at `base_url`. Every request is bounded
    /// by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &'static str) -> Result<Url, ApiError> {
        // Paths are absolute; strip the slash so a base path prefix survives the join.
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                message: e.to_string(),
            })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &'static str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(endpoint, %status, "backend response");
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, ApiError> {
        let url = self.endpoint(endpoint)?;
        let response = self.send(self.http.get(url), endpoint).await?;
        let body = response.text().await?;
        decode(endpoint, &body)
    }
}

#[async_trait]
impl DraftApi for HttpDraftApi {
    async fn status(&self) -> Result<(), ApiError> {
        let url = self.endpoint(STATUS_PATH)?;
        self.send(self.http.get(url), STATUS_PATH).await?;
        Ok(())
    }

    async fn refresh(&self) -> Result<(), ApiError> {
        let url = self.endpoint(REFRESH_PATH)?;
        let response = self.send(self.http.post(url), REFRESH_PATH).await?;
        let body = response.text().await?;
        let _ack: serde_json::Value = decode(REFRESH_PATH, &body)?;
        Ok(())
    }

    async fn players(&self) -> Result<Vec<Player>, ApiError> {
        self.get_json(PLAYERS_PATH).await
    }

    async fn suggestions(&self) -> Result<SuggestionBundle, ApiError> {
        self.get_json(SUGGESTIONS_PATH).await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse and normalize the backend base URL so that endpoint joins keep any
/// path prefix (`http://host/draft` and `http://host/draft/` are equivalent).
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let invalid = |message: String| ApiError::InvalidUrl {
        url: raw.to_string(),
        message,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { endpoint, source })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
