use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::security::hsts_enabled_from_env;
use crate::config::{create_cors_layer, with_security_headers};
use crate::handlers::{create_event, health_check, list_events};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let api = Router::new().route("/events", get(list_events).put(create_event));

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .with_state(state);

    with_security_headers(router, hsts_enabled_from_env())
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
