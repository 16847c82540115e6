use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use axum::Json;
use metrics::{counter, histogram};
use serde::Deserialize;
use serde_json::json;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    application::{
        drafts::{DraftError, DraftService},
        error::ErrorReport,
        render::{RenderError, render_resume},
    },
    domain::{resume::ResumeDocument, templates::TemplateId},
    infra::stylesheets::EmbeddedStylesheets,
};

use super::{
    drafts::drafts_router,
    middleware::{log_responses, set_request_context},
    rate_limit::{PreviewRateLimiter, preview_rate_limit},
};

const NOT_FOUND_PAGE: &str = "<!doctype html><html><head><title>Not Found</title></head><body><h1>Not Found</h1></body></html>";

const PREVIEW_CSP: &str =
    "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data: https:;";

#[derive(Clone)]
pub struct HttpState {
    pub drafts: Arc<DraftService>,
    pub styles: EmbeddedStylesheets,
}

pub fn build_router(state: HttpState, rate_limiter: PreviewRateLimiter) -> Router {
    let preview_routes = Router::new()
        .route("/p/{token}", get(preview_page))
        .layer(middleware::from_fn_with_state(
            rate_limiter,
            preview_rate_limit,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(preview_routes)
        .merge(drafts_router())
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn health() -> Json<serde_json::Value> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Json(json!({
        "status": "ok",
        "service": "vitae",
        "timestamp": timestamp,
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PreviewQuery {
    template: Option<String>,
}

/// Public, unauthenticated resume preview. The token is the only
/// capability; anything that does not resolve renders the same 404 page.
async fn preview_page(
    State(state): State<HttpState>,
    Path(token): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> Response {
    let data = match state.drafts.preview(&token).await {
        Ok(data) => data,
        Err(DraftError::NotFound) => return not_found_page(),
        Err(err) => {
            let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
            ErrorReport::from_error(
                "infra::http::preview_page",
                StatusCode::INTERNAL_SERVER_ERROR,
                &err,
            )
            .attach(&mut response);
            return response;
        }
    };

    let template = query
        .template
        .as_deref()
        .or_else(|| data.pointer("/presentation/template").and_then(|v| v.as_str()))
        .map(TemplateId::parse)
        .unwrap_or_default();

    let document = ResumeDocument::from_value(&data);

    let start = Instant::now();
    let html = match render_resume(&document, template, &state.styles) {
        Ok(html) => html,
        Err(err @ RenderError::StylesheetNotFound { .. }) => {
            let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
            ErrorReport::from_error(
                "infra::http::preview_page",
                StatusCode::INTERNAL_SERVER_ERROR,
                &err,
            )
            .attach(&mut response);
            return response;
        }
    };
    histogram!("vitae_render_duration_ms").record(start.elapsed().as_millis() as f64);
    counter!("vitae_preview_render_total").increment(1);

    let mut response = Html(html).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(PREVIEW_CSP),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );
    response
}

fn not_found_page() -> Response {
    let mut response = (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response();
    ErrorReport::from_message(
        "infra::http::preview_page",
        StatusCode::NOT_FOUND,
        "Preview token did not match an active draft",
    )
    .attach(&mut response);
    response
}
