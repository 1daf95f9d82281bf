pub mod health;
pub mod portfolio;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::proxy::handle_proxy_image;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/proxy-image", get(handle_proxy_image))
        .route(
            "/api/v1/profiles/:username/metadata",
            get(portfolio::handle_portfolio_metadata),
        )
        .route("/:username", get(portfolio::handle_portfolio_page));

    if let Some(dir) = &state.config.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.with_state(state)
}
