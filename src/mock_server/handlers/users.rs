//! User endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{not_found, page_response, PageQuery, SharedState};
use crate::UserInfo;

/// Request body for creating or updating a user.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserInfo,
}

/// GET /users
pub async fn list_users(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;
    page_response("users", state.users.values().collect(), &query)
}

/// GET /users/{id}
pub async fn get_user(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;

    match state.users.get(&id) {
        Some(user) => (StatusCode::OK, Json(serde_json::json!({ "user": user }))).into_response(),
        None => not_found("User", &id),
    }
}

/// POST /users
pub async fn create_user(
    State(state): State<SharedState>,
    Json(body): Json<UserEnvelope>,
) -> Response {
    let mut state = state.write().await;
    let user = state.create_user(body.user);
    (StatusCode::CREATED, Json(serde_json::json!({ "user": user }))).into_response()
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<UserEnvelope>,
) -> Response {
    let mut state = state.write().await;

    match state.update_user(&id, body.user) {
        Some(user) => (StatusCode::OK, Json(serde_json::json!({ "user": user }))).into_response(),
        None => not_found("User", &id),
    }
}

/// DELETE /users/{id}
pub async fn delete_user(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut state = state.write().await;

    if state.delete_user(&id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("User", &id)
    }
}
