// src/db/journey_repository.rs
// DOCUMENTATION: Journey database operations
// PURPOSE: CRUD for the journey table (images and videos)

use crate::errors::ToursError;
use crate::models::{CreateJourneyItemRequest, JourneyItem, MediaType};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Internal struct for mapping database rows to JourneyItem
/// DOCUMENTATION: media_type is stored as TEXT and parsed on the way out
#[derive(Debug, FromRow)]
struct JourneyRow {
    pub id: Uuid,
    pub media_url: String,
    pub media_type: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

impl JourneyRow {
    fn into_item(self) -> Result<JourneyItem, ToursError> {
        let media_type: MediaType = self.media_type.parse().map_err(|e: String| {
            log::error!("Journey item {} has bad media type: {}", self.id, e);
            ToursError::DatabaseError(e)
        })?;

        Ok(JourneyItem {
            id: self.id,
            media_url: self.media_url,
            media_type,
            file_name: self.file_name,
            created_at: self.created_at,
        })
    }
}

pub struct JourneyRepository;

impl JourneyRepository {
    /// All journey items, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<JourneyItem>, ToursError> {
        let rows = sqlx::query_as::<_, JourneyRow>("SELECT * FROM journey ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch journey items: {}", e);
                ToursError::DatabaseError(format!("Fetch journey items failed: {}", e))
            })?;

        rows.into_iter().map(JourneyRow::into_item).collect()
    }

    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<JourneyItem>, ToursError> {
        sqlx::query_as::<_, JourneyRow>("SELECT * FROM journey WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch journey item {}: {}", id, e);
                ToursError::DatabaseError(format!("Fetch journey item failed: {}", e))
            })?
            .map(JourneyRow::into_item)
            .transpose()
    }

    pub async fn create(
        pool: &PgPool,
        req: &CreateJourneyItemRequest,
    ) -> Result<JourneyItem, ToursError> {
        let row = sqlx::query_as::<_, JourneyRow>(
            r#"
            INSERT INTO journey (id, media_url, media_type, file_name)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.media_url)
        .bind(req.media_type.as_str())
        .bind(&req.file_name)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Database insert error: {}", e);
            ToursError::DatabaseError(format!("Create journey item failed: {}", e))
        })?;

        row.into_item()
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<JourneyItem>, ToursError> {
        sqlx::query_as::<_, JourneyRow>("DELETE FROM journey WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete journey item {}: {}", id, e);
                ToursError::DatabaseError(format!("Delete journey item failed: {}", e))
            })?
            .map(JourneyRow::into_item)
            .transpose()
    }
}
