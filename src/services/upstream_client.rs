use crate::utils::UpstreamError;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin GET + JSON client bound to the upstream base URL.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(UpstreamError::Transport)?;

        Self::with_http(http, base_url)
    }

    /// Reuses an existing `reqwest::Client` (and its connection pool).
    pub fn with_http(http: Client, base_url: &str) -> Result<Self, UpstreamError> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `{base_url}{path}` and decode the JSON body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let url = self.url_for(path);
        log::debug!("🌐 GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                log::warn!("⚠️  Upstream unreachable for {}: {}", url, e);
                UpstreamError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("⚠️  Upstream {} answered {}", url, status);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(UpstreamError::Transport)?;

        serde_json::from_slice(&body).map_err(|e| {
            log::warn!("⚠️  Unexpected body from {}: {}", url, e);
            UpstreamError::Decode(e)
        })
    }
}

/// Trims the base URL and makes it end with exactly one `/`.
pub fn normalize_base_url(raw: &str) -> Result<String, UpstreamError> {
    let trimmed = raw.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(UpstreamError::InvalidBaseUrl(
            "base URL must not be empty".to_string(),
        ));
    }

    let normalized = format!("{}/", trimmed);
    Url::parse(&normalized)
        .map_err(|e| UpstreamError::InvalidBaseUrl(format!("{}: {}", raw.trim(), e)))?;

    Ok(normalized)
}
