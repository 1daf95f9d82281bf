//! Image proxy: serves external avatars and logos from the service's own origin.

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use reqwest::redirect::Policy;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::errors::AppError;
use crate::state::AppState;

const CACHE_CONTROL: &str = "public, max-age=86400";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const RELAYED_CSP: &str = "default-src 'none'; sandbox";
const MAX_REDIRECTS: usize = 5;
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ProxyError {
    #[error("Missing url parameter")]
    MissingUrl,

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Host not allowed: {0}")]
    HostNotAllowed(String),
}

impl From<ProxyError> for AppError {
    fn from(e: ProxyError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    pub url: Option<String>,
}

/// Parses and checks a proxy target. An empty allow-list permits any host.
pub fn validate_target(raw: Option<&str>, allowed_hosts: &[String]) -> Result<Url, ProxyError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or(ProxyError::MissingUrl)?;
    let url = Url::parse(raw).map_err(|e| ProxyError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ProxyError::UnsupportedScheme(url.scheme().to_string()));
    }

    let host = url
        .host_str()
        .ok_or_else(|| ProxyError::InvalidUrl(raw.to_string()))?
        .to_ascii_lowercase();

    if !allowed_hosts.is_empty() && !allowed_hosts.iter().any(|h| *h == host) {
        return Err(ProxyError::HostNotAllowed(host));
    }

    Ok(url)
}

/// HTTP client for image fetches. Every redirect hop is held to the same
/// scheme and host rules as the first request.
pub fn build_proxy_client(
    allowed_hosts: &[String],
    timeout: Duration,
) -> reqwest::Result<reqwest::Client> {
    let allowed_hosts = allowed_hosts.to_vec();
    let policy = Policy::custom(move |attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        let checked = validate_target(Some(attempt.url().as_str()), &allowed_hosts);
        match checked {
            Ok(_) => attempt.follow(),
            Err(e) => attempt.error(e),
        }
    });

    reqwest::Client::builder()
        .timeout(timeout)
        .redirect(policy)
        .build()
}

/// GET /api/proxy-image?url=...
pub async fn handle_proxy_image(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<Response, AppError> {
    let target = validate_target(
        query.url.as_deref(),
        &state.config.image_proxy_allowed_hosts,
    )?;
    debug!("Proxying image {target}");

    let upstream = state
        .http
        .get(target.clone())
        .send()
        .await
        .map_err(|e| AppError::BadGateway(format!("fetching {target}: {e}")))?;

    let status = upstream.status();
    if !status.is_success() {
        warn!("Image upstream {target} returned {status}");
        return Err(AppError::BadGateway(format!("{target} returned {status}")));
    }

    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    if !is_image_or_unknown(&content_type) {
        return Err(AppError::BadGateway(format!(
            "{target} is not an image ({content_type})"
        )));
    }

    let body = read_limited(upstream, MAX_IMAGE_BYTES)
        .await
        .map_err(|e| AppError::BadGateway(format!("reading {target}: {e}")))?;

    let content_type = HeaderValue::from_str(&content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL)),
            (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
            (header::CONTENT_SECURITY_POLICY, HeaderValue::from_static(RELAYED_CSP)),
        ],
        body,
    )
        .into_response())
}

/// Buffers the upstream body, refusing anything larger than `limit`.
async fn read_limited(mut upstream: reqwest::Response, limit: usize) -> Result<Bytes, String> {
    if upstream.content_length().is_some_and(|len| len > limit as u64) {
        return Err(format!("body exceeds {limit} bytes"));
    }

    let mut body = BytesMut::new();
    while let Some(chunk) = upstream.chunk().await.map_err(|e| e.to_string())? {
        if body.len() + chunk.len() > limit {
            return Err(format!("body exceeds {limit} bytes"));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

/// Upstreams that omit a content type are relayed as opaque bytes. SVG can
/// carry script, so it is never relayed.
fn is_image_or_unknown(content_type: &str) -> bool {
    let lower = content_type.to_ascii_lowercase();
    let essence = lower.split(';').next().unwrap_or_default().trim();
    if essence == "image/svg+xml" {
        return false;
    }
    essence.starts_with("image/") || essence == DEFAULT_CONTENT_TYPE
}
