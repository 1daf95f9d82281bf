//! Axum route handlers for portfolio pages and their metadata.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::page::PortfolioView;
use crate::render::{render_not_found, render_page};
use crate::seo::{build_metadata, fallback_metadata, PageMetadata};
use crate::state::AppState;

/// GET /:username
pub async fn handle_portfolio_page(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Html<String>, AppError> {
    let site = &state.config.site;

    let profile = match state.profiles.fetch(&username).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Portfolio '{username}' unavailable: {e}");
            let page = render_not_found(site).map_err(anyhow::Error::from)?;
            return Err(AppError::PageNotFound(page));
        }
    };

    let view = PortfolioView::build(&profile, &username, site, Utc::now());
    let page = render_page(&view).map_err(anyhow::Error::from)?;

    info!(
        "Rendered portfolio '{username}' ({} sections)",
        view.nav.len()
    );
    Ok(Html(page))
}

/// GET /api/v1/profiles/:username/metadata
/// Same metadata the page head carries; the generic fallback when the profile is unavailable.
pub async fn handle_portfolio_metadata(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<PageMetadata> {
    let site = &state.config.site;
    match state.profiles.fetch(&username).await {
        Ok(profile) => Json(build_metadata(&profile, &username, site)),
        Err(e) => {
            warn!("Metadata for '{username}' fell back to defaults: {e}");
            Json(fallback_metadata(site))
        }
    }
}
