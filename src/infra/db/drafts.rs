use async_trait::async_trait;
use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{DraftRecord, DraftsRepo, RepoError};

use super::{PostgresRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct DraftRow {
    id: Uuid,
    user_id: i64,
    data: Value,
    preview_token: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<DraftRow> for DraftRecord {
    fn from(row: DraftRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            data: row.data,
            preview_token: row.preview_token,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl DraftsRepo for PostgresRepositories {
    async fn find_active(&self, user_id: i64) -> Result<DraftRecord, RepoError> {
        let row = sqlx::query_as::<_, DraftRow>(
            "SELECT id, user_id, data, preview_token, created_at, updated_at \
             FROM drafts WHERE user_id = $1 AND is_active",
        )
        .bind(user_id)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn find_by_preview_token(&self, token: &str) -> Result<DraftRecord, RepoError> {
        let row = sqlx::query_as::<_, DraftRow>(
            "SELECT id, user_id, data, preview_token, created_at, updated_at \
             FROM drafts WHERE preview_token = $1 AND is_active",
        )
        .bind(token)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn insert_active(
        &self,
        user_id: i64,
        data: &Value,
        preview_token: &str,
    ) -> Result<DraftRecord, RepoError> {
        let row = sqlx::query_as::<_, DraftRow>(
            "INSERT INTO drafts (user_id, is_active, data, preview_token) \
             VALUES ($1, TRUE, $2, $3) \
             RETURNING id, user_id, data, preview_token, created_at, updated_at",
        )
        .bind(user_id)
        .bind(data)
        .bind(preview_token)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn replace_data(&self, user_id: i64, data: &Value) -> Result<DraftRecord, RepoError> {
        let row = sqlx::query_as::<_, DraftRow>(
            "UPDATE drafts SET data = $2, updated_at = now() \
             WHERE user_id = $1 AND is_active \
             RETURNING id, user_id, data, preview_token, created_at, updated_at",
        )
        .bind(user_id)
        .bind(data)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn rotate_preview_token(
        &self,
        user_id: i64,
        preview_token: &str,
        touch_updated_at: bool,
    ) -> Result<String, RepoError> {
        let sql = if touch_updated_at {
            "UPDATE drafts SET preview_token = $2, updated_at = now() \
             WHERE user_id = $1 AND is_active \
             RETURNING preview_token"
        } else {
            "UPDATE drafts SET preview_token = $2 \
             WHERE user_id = $1 AND is_active \
             RETURNING preview_token"
        };
        let (token,): (String,) = sqlx::query_as(sql)
            .bind(user_id)
            .bind(preview_token)
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;
        Ok(token)
    }
}
