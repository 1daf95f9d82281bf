/// Profile client: the single point of entry for reads from the upstream profile API.
///
/// Pages, metadata and tests all go through `ProfileSource`, so a stub source can
/// replace the HTTP client without touching handlers.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::profile::ProfileDocument;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Username is empty")]
    InvalidUsername,

    #[error("Invalid profile API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Profile API returned status {status}")]
    Status { status: u16 },

    #[error("Profile document could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce a profile document for a username.
///
/// Carried in `AppState` as `Arc<dyn ProfileSource>`.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, username: &str) -> Result<ProfileDocument, FetchError>;
}

/// Reads profiles from `GET {base_url}/{username}`. No caching, no retries.
#[derive(Clone)]
pub struct ProfileClient {
    client: Client,
    base_url: Url,
}

impl ProfileClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base_url).map_err(|e| FetchError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    /// Builds the request URL with the username as a single percent-encoded path segment.
    pub fn profile_url(&self, username: &str) -> Result<Url, FetchError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(FetchError::InvalidUsername);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }
}

/// Decodes a profile body. Only a JSON object is a profile; serde would
/// otherwise accept an array and fill fields by position.
pub fn decode_profile(body: &str) -> Result<ProfileDocument, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(FetchError::Decode(serde::de::Error::custom(
            "profile document is not a JSON object",
        )));
    }
    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl ProfileSource for ProfileClient {
    async fn fetch(&self, username: &str) -> Result<ProfileDocument, FetchError> {
        let url = self.profile_url(username)?;
        debug!("Fetching profile from {url}");

        let response = self
            .client
            .get(url)
            .header(header::CACHE_CONTROL, "no-cache")
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let profile = decode_profile(&body)?;

        debug!("Profile for '{username}' fetched ({} bytes)", body.len());
        Ok(profile)
    }
}
