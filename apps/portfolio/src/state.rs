use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::profile_client::ProfileSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where profile documents come from. Default: `ProfileClient` over HTTP.
    pub profiles: Arc<dyn ProfileSource>,
    /// Outbound client for the image proxy.
    pub http: Client,
}
