//! HTTP request handlers for the mock server.

pub mod catalog;
pub mod orchestrations;
pub mod services;
pub mod teams;
pub mod users;

pub use catalog::*;
pub use orchestrations::*;
pub use services::*;
pub use teams::*;
pub use users::*;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

/// State handle shared by every handler.
pub type SharedState = Arc<RwLock<MockState>>;

/// PagerDuty's page size when `limit` is not given.
const DEFAULT_LIMIT: usize = 25;

/// PagerDuty's largest accepted page size.
const MAX_LIMIT: usize = 100;

/// Offset pagination parameters accepted by every collection endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

/// Build a page response `{<items_field>: [...], offset, limit, more, total}`.
pub fn page_response<T: Serialize>(items_field: &str, items: Vec<&T>, query: &PageQuery) -> Response {
    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let total = items.len();

    let page: Vec<&T> = items.into_iter().skip(offset).take(limit).collect();
    let more = offset + page.len() < total;

    let page = match serde_json::to_value(page) {
        Ok(page) => page,
        Err(e) => return internal_error(&e.to_string()),
    };

    let mut body = Map::new();
    body.insert(items_field.to_string(), page);
    body.insert("offset".to_string(), offset.into());
    body.insert("limit".to_string(), limit.into());
    body.insert("more".to_string(), more.into());
    body.insert("total".to_string(), Value::Null);

    (StatusCode::OK, Json(Value::Object(body))).into_response()
}

/// 500 body for state the mock cannot serialize.
pub fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": {"message": "Internal Server Error", "code": 2001, "errors": [message]}
        })),
    )
        .into_response()
}

/// PagerDuty-style 404 body.
pub fn not_found(kind: &str, id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": {
                "message": "Not Found",
                "code": 2100,
                "errors": [format!("{kind} {id} not found")]
            }
        })),
    )
        .into_response()
}

/// Reject requests without the required `Token token=<key>` header.
pub async fn require_token(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let authorized = state.read().await.is_authorized(header.as_deref());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": {"message": "Unauthorized", "code": 2006}
            })),
        )
            .into_response();
    }

    next.run(request).await
}
