use std::error::Error as StdError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::application::drafts::DraftError;
use crate::infra::error::InfraError;

/// Diagnostic payload carried through response extensions so the logging
/// middleware can report the full error chain without leaking it to clients.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, status: StatusCode, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            status,
            messages,
        }
    }

    pub fn from_message(
        source: &'static str,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            status,
            messages: vec![message.into()],
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

/// A client-facing API error. Serializes to the envelope
/// `{"error": {"code", "message", "details"?}}` used by every JSON endpoint.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    details: Option<Value>,
    report: ErrorReport,
}

impl ApiError {
    pub fn new(
        source: &'static str,
        status: StatusCode,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let report = ErrorReport::from_message(source, status, message.clone());
        Self {
            status,
            code,
            message,
            details: None,
            report,
        }
    }

    pub fn from_error(
        source: &'static str,
        status: StatusCode,
        code: &'static str,
        message: impl Into<String>,
        error: &dyn StdError,
    ) -> Self {
        let report = ErrorReport::from_error(source, status, error);
        Self {
            status,
            code,
            message: message.into(),
            details: None,
            report,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn unauthorized(source: &'static str) -> Self {
        Self::new(
            source,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Valid X-User-Id header is required",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "code": self.code,
            "message": self.message,
        });
        if let Some(details) = self.details {
            error["details"] = details;
        }
        let mut response = (self.status, Json(json!({ "error": error }))).into_response();
        self.report.attach(&mut response);
        response
    }
}

impl From<DraftError> for ApiError {
    fn from(error: DraftError) -> Self {
        const SOURCE: &str = "infra::http::draft_error_to_api_error";
        match error {
            DraftError::Validation(detail) => ApiError::new(
                SOURCE,
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Draft payload failed validation",
            )
            .with_details(json!({ "reason": detail })),
            DraftError::OwnerMismatch => ApiError::new(
                SOURCE,
                StatusCode::FORBIDDEN,
                "FORBIDDEN_DRAFT_OWNER_MISMATCH",
                "Draft userId must match the authenticated user",
            ),
            DraftError::AlreadyExists => ApiError::new(
                SOURCE,
                StatusCode::CONFLICT,
                "DRAFT_ALREADY_EXISTS",
                "An active draft already exists for this user",
            ),
            DraftError::NotFound => ApiError::new(
                SOURCE,
                StatusCode::NOT_FOUND,
                "DRAFT_NOT_FOUND",
                "No active draft exists for this user",
            ),
            DraftError::Repo(err) => ApiError::from_error(
                SOURCE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error",
                &err,
            ),
        }
    }
}

/// Startup-path errors surfaced by `main`, never by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}
