//! Axum handlers for the two relay endpoints.
//!
//! Each handler deserializes the inbound body with the `Json` extractor,
//! hands it to the shared [`Relay`] and returns the upstream JSON as-is.
//! Body rejections are reported with the same `{"detail": ...}` shape as
//! upstream failures.

use crate::core::relay::Relay;
use crate::domain::model::{EstimationRequest, SearchQuery};
use crate::utils::error::RelayError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared state for the relay handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// Error body returned to callers, `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
        if status.is_server_error() && !matches!(self, RelayError::UpstreamStatus { .. }) {
            error!("Relay failed: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.detail(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for RelayError {
    fn from(rejection: JsonRejection) -> Self {
        RelayError::InvalidRequest {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    }
}

/// `POST /search-locality`
#[instrument(skip_all)]
pub async fn search_locality(
    State(state): State<AppState>,
    payload: Result<Json<SearchQuery>, JsonRejection>,
) -> Result<Json<serde_json::Value>, RelayError> {
    let Json(query) = payload?;
    let body = state.relay.search_locality(&query).await?;
    info!(name = %query.name, "Locality search relayed");
    Ok(Json(body))
}

/// `POST /estimate-property-value`
#[instrument(skip_all)]
pub async fn estimate_property_value(
    State(state): State<AppState>,
    payload: Result<Json<EstimationRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, RelayError> {
    let Json(request) = payload?;
    let body = state.relay.estimate_property_value(&request).await?;
    info!(product = %request.product, "Price estimation relayed");
    Ok(Json(body))
}
