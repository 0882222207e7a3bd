/// API route modules
pub mod health;
pub mod search;

use crate::{middleware, state::AppState};
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the service router.
///
/// `GET /` is the search endpoint and requires the access token;
/// `GET /health` is open.
pub fn router(app_state: AppState) -> Router {
    let public_routes = Router::new().route("/health", get(health::health));

    let protected_routes = Router::new()
        .route("/", get(search::search_users))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.credentials),
            middleware::access_token_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
