//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// One stored draft row. The `data` column holds the draft JSON verbatim;
/// the server never rewrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRecord {
    pub id: Uuid,
    pub user_id: i64,
    pub data: Value,
    pub preview_token: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Persistence for drafts. At most one active draft exists per user,
/// enforced by a partial unique index in the store.
#[async_trait]
pub trait DraftsRepo: Send + Sync {
    async fn find_active(&self, user_id: i64) -> Result<DraftRecord, RepoError>;

    async fn find_by_preview_token(&self, token: &str) -> Result<DraftRecord, RepoError>;

    async fn insert_active(
        &self,
        user_id: i64,
        data: &Value,
        preview_token: &str,
    ) -> Result<DraftRecord, RepoError>;

    async fn replace_data(&self, user_id: i64, data: &Value) -> Result<DraftRecord, RepoError>;

    /// Swap in a new preview token; `touch_updated_at` distinguishes a
    /// publish (which bumps the timestamp) from a plain rotation.
    async fn rotate_preview_token(
        &self,
        user_id: i64,
        preview_token: &str,
        touch_updated_at: bool,
    ) -> Result<String, RepoError>;
}
