//! Service endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{not_found, page_response, PageQuery, SharedState};

/// GET /services
pub async fn list_services(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;
    page_response("services", state.services.values().collect(), &query)
}

/// GET /services/{id}
pub async fn get_service(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;

    match state.services.get(&id) {
        Some(service) => (
            StatusCode::OK,
            Json(serde_json::json!({ "service": service })),
        )
            .into_response(),
        None => not_found("Service", &id),
    }
}
