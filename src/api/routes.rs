//! Router for the relay.
//!
//! ```text
//! /search-locality            POST - locality type-ahead search
//! /estimate-property-value    POST - property price estimation
//! /estimate-propert-value     POST - legacy path, same handler
//! ```

use crate::api::handlers::{estimate_property_value, search_locality, AppState};
use axum::{routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the relay router with tracing and permissive CORS.
pub fn create_router(state: AppState) -> Router {
    routes()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/search-locality", post(search_locality))
        .route("/estimate-property-value", post(estimate_property_value))
        .route("/estimate-propert-value", post(estimate_property_value))
}
