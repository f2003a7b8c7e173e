//! Event orchestration handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{not_found, SharedState};
use crate::ServiceOrchestrationStatus;

/// GET /event_orchestrations/services/{id}/active
pub async fn get_orchestration_status(
    State(state): State<SharedState>,
    Path(service_id): Path<String>,
) -> Response {
    let state = state.read().await;

    match state.orchestration_active(&service_id) {
        Some(active) => (StatusCode::OK, Json(ServiceOrchestrationStatus { active })).into_response(),
        None => not_found("Service", &service_id),
    }
}

/// PUT /event_orchestrations/services/{id}/active
pub async fn update_orchestration_status(
    State(state): State<SharedState>,
    Path(service_id): Path<String>,
    Json(status): Json<ServiceOrchestrationStatus>,
) -> Response {
    let mut state = state.write().await;

    if !state.services.contains_key(&service_id) {
        return not_found("Service", &service_id);
    }
    state
        .orchestration_active
        .insert(service_id, status.active);
    (StatusCode::OK, Json(status)).into_response()
}
