//! Draft envelope validation for API writes.
//!
//! The server validates incoming draft JSON but never repairs or augments it:
//! the stored document remains the single source of truth. Reads return the
//! JSON untouched; only `POST`/`PUT` payloads pass through this module.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DraftValidationError {
    #[error("invalid draft JSON: {0}")]
    Schema(String),
    #[error("meta.userId must not be empty")]
    EmptyUserId,
    #[error("meta.userId must match the authenticated user")]
    OwnerMismatch,
}

/// The full draft write payload: `{ meta, content, presentation }`.
/// Unknown keys are ignored, matching the original contract.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftEnvelope {
    pub meta: DraftMeta,
    pub content: DraftContent,
    pub presentation: DraftPresentation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftMeta {
    #[serde(rename = "draftId")]
    pub draft_id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub lang: DraftLang,
    pub status: DraftStatus,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftLang {
    En,
    Ru,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    Draft,
}

/// Content slices are intentionally loose here: their internal shape is owned
/// by the rendering engine's typed model, which tolerates anything.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftContent {
    pub about: serde_json::Map<String, Value>,
    pub experience: Vec<Value>,
    pub skills: Vec<Value>,
    pub contacts: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftPresentation {
    /// Any identifier is accepted; the template binder resolves unknown ids
    /// to the default at render time.
    pub template: String,
    #[serde(rename = "colorScheme")]
    pub color_scheme: ColorScheme,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    Default,
}

/// Validate a write payload against the draft contract and the ownership
/// invariant: `meta.userId` must equal the authenticated user id.
pub fn validate_draft(payload: &Value, auth_user_id: i64) -> Result<DraftEnvelope, DraftValidationError> {
    let envelope: DraftEnvelope = serde_json::from_value(payload.clone())
        .map_err(|err| DraftValidationError::Schema(err.to_string()))?;

    if envelope.meta.user_id.is_empty() {
        return Err(DraftValidationError::EmptyUserId);
    }
    if envelope.meta.user_id != auth_user_id.to_string() {
        return Err(DraftValidationError::OwnerMismatch);
    }

    Ok(envelope)
}
