//! Draft workflows: the service behind the drafts API and the preview route.
//!
//! The server validates draft JSON but never repairs it, performs only full
//! replacements (no partial section updates), and keeps exactly one active
//! draft per user.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::application::repos::{DraftsRepo, RepoError};
use crate::application::security::generate_preview_token;
use crate::domain::draft::{DraftValidationError, validate_draft};

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("invalid draft payload: {0}")]
    Validation(String),
    #[error("draft owner does not match the authenticated user")]
    OwnerMismatch,
    #[error("active draft already exists")]
    AlreadyExists,
    #[error("active draft not found")]
    NotFound,
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for DraftError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::NotFound,
            // A racing insert can trip the partial unique index after the
            // existence check passed; both paths report the same conflict.
            RepoError::Duplicate { .. } => Self::AlreadyExists,
            other => Self::Repo(other),
        }
    }
}

impl From<DraftValidationError> for DraftError {
    fn from(err: DraftValidationError) -> Self {
        match err {
            DraftValidationError::OwnerMismatch => Self::OwnerMismatch,
            other => Self::Validation(other.to_string()),
        }
    }
}

/// A created draft together with its freshly minted preview token.
#[derive(Debug, Clone)]
pub struct CreatedDraft {
    pub data: Value,
    pub preview_token: String,
}

pub struct DraftService {
    repo: Arc<dyn DraftsRepo>,
}

impl DraftService {
    pub fn new(repo: Arc<dyn DraftsRepo>) -> Self {
        Self { repo }
    }

    /// The active draft JSON for a user, returned verbatim.
    pub async fn active_draft(&self, user_id: i64) -> Result<Value, DraftError> {
        let record = self.repo.find_active(user_id).await?;
        Ok(record.data)
    }

    /// Create-only: fails with [`DraftError::AlreadyExists`] when an active
    /// draft is present. Assigns a fresh preview token.
    pub async fn create(&self, user_id: i64, payload: Value) -> Result<CreatedDraft, DraftError> {
        validate_draft(&payload, user_id)?;

        if self.repo.find_active(user_id).await.is_ok() {
            return Err(DraftError::AlreadyExists);
        }

        let token = generate_preview_token();
        let record = self.repo.insert_active(user_id, &payload, &token).await?;
        Ok(CreatedDraft {
            data: record.data,
            preview_token: record.preview_token,
        })
    }

    /// Update-only full replacement of the draft JSON.
    pub async fn replace(&self, user_id: i64, payload: Value) -> Result<Value, DraftError> {
        validate_draft(&payload, user_id)?;
        let record = self.repo.replace_data(user_id, &payload).await?;
        Ok(record.data)
    }

    /// Invalidate the current preview link by minting a new token.
    pub async fn rotate_preview_token(&self, user_id: i64) -> Result<String, DraftError> {
        let token = generate_preview_token();
        Ok(self.repo.rotate_preview_token(user_id, &token, false).await?)
    }

    /// Publish the current draft: rotates the preview token and bumps the
    /// stored timestamp. The draft JSON itself is never mutated.
    pub async fn publish(&self, user_id: i64) -> Result<String, DraftError> {
        let token = generate_preview_token();
        Ok(self.repo.rotate_preview_token(user_id, &token, true).await?)
    }

    /// The draft JSON behind a public preview token.
    pub async fn preview(&self, token: &str) -> Result<Value, DraftError> {
        let record = self.repo.find_by_preview_token(token).await?;
        Ok(record.data)
    }
}
