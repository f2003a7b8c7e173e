//! Escalation policy, vendor and priority handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{not_found, page_response, PageQuery, SharedState};

/// GET /escalation_policies
pub async fn list_escalation_policies(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;
    page_response(
        "escalation_policies",
        state.escalation_policies.values().collect(),
        &query,
    )
}

/// GET /escalation_policies/{id}
pub async fn get_escalation_policy(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;

    match state.escalation_policies.get(&id) {
        Some(policy) => (
            StatusCode::OK,
            Json(serde_json::json!({ "escalation_policy": policy })),
        )
            .into_response(),
        None => not_found("Escalation policy", &id),
    }
}

/// GET /vendors
pub async fn list_vendors(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;
    page_response("vendors", state.vendors.values().collect(), &query)
}

/// GET /vendors/{id}
///
/// Returned unwrapped, without a `vendor` envelope.
pub async fn get_vendor(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;

    match state.vendors.get(&id) {
        Some(vendor) => (StatusCode::OK, Json(vendor.clone())).into_response(),
        None => not_found("Vendor", &id),
    }
}

/// GET /priorities
pub async fn list_priorities(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;
    page_response("priorities", state.priorities.values().collect(), &query)
}
