//! Team endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{not_found, page_response, PageQuery, SharedState};

/// GET /teams
pub async fn list_teams(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;
    page_response("teams", state.teams.values().collect(), &query)
}

/// GET /teams/{id}
pub async fn get_team(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;

    match state.teams.get(&id) {
        Some(team) => (StatusCode::OK, Json(serde_json::json!({ "team": team }))).into_response(),
        None => not_found("Team", &id),
    }
}

/// GET /teams/{id}/members
pub async fn list_team_members(
    State(state): State<SharedState>,
    Path(team_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;

    match state.team_members.get(&team_id) {
        Some(members) => page_response("members", members.iter().collect(), &query),
        None => not_found("Team", &team_id),
    }
}
