//! Authenticated draft endpoints under `/drafts/me`.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::application::error::ApiError;

use super::public::HttpState;

const USER_ID_HEADER: &str = "x-user-id";

pub fn drafts_router() -> Router<HttpState> {
    Router::new()
        .route("/drafts/me", get(get_draft).post(create_draft).put(replace_draft))
        .route("/drafts/me/preview-token", post(rotate_preview_token))
        .route("/drafts/me/publish", post(publish_draft))
}

/// Interim auth scheme: the user id arrives in the `X-User-Id` header as a
/// positive decimal integer.
fn user_id_from_headers(headers: &HeaderMap) -> Result<i64, ApiError> {
    const SOURCE: &str = "infra::http::user_id_from_headers";

    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized(SOURCE))?;

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::unauthorized(SOURCE));
    }
    raw.parse::<i64>()
        .map_err(|_| ApiError::unauthorized(SOURCE))
}

async fn get_draft(State(state): State<HttpState>, headers: HeaderMap) -> Response {
    let user_id = match user_id_from_headers(&headers) {
        Ok(user_id) => user_id,
        Err(err) => return err.into_response(),
    };

    match state.drafts.active_draft(user_id).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

async fn create_draft(
    State(state): State<HttpState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    let user_id = match user_id_from_headers(&headers) {
        Ok(user_id) => user_id,
        Err(err) => return err.into_response(),
    };

    match state.drafts.create(user_id, payload).await {
        Ok(created) => {
            // Echo the stored draft plus its preview token for immediate use.
            let mut body = created.data;
            if let Some(object) = body.as_object_mut() {
                object.insert("preview_token".to_string(), json!(created.preview_token));
            }
            (StatusCode::CREATED, Json(body)).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

async fn replace_draft(
    State(state): State<HttpState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    let user_id = match user_id_from_headers(&headers) {
        Ok(user_id) => user_id,
        Err(err) => return err.into_response(),
    };

    match state.drafts.replace(user_id, payload).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

async fn rotate_preview_token(State(state): State<HttpState>, headers: HeaderMap) -> Response {
    let user_id = match user_id_from_headers(&headers) {
        Ok(user_id) => user_id,
        Err(err) => return err.into_response(),
    };

    match state.drafts.rotate_preview_token(user_id).await {
        Ok(token) => (StatusCode::OK, Json(json!({ "preview_token": token }))).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

async fn publish_draft(State(state): State<HttpState>, headers: HeaderMap) -> Response {
    let user_id = match user_id_from_headers(&headers) {
        Ok(user_id) => user_id,
        Err(err) => return err.into_response(),
    };

    match state.drafts.publish(user_id).await {
        Ok(token) => (StatusCode::OK, Json(json!({ "preview_token": token }))).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}
