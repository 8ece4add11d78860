// src/db/gallery_repository.rs
// DOCUMENTATION: Gallery database operations

use crate::errors::ToursError;
use crate::models::GalleryItem;
use sqlx::PgPool;
use uuid::Uuid;

pub struct GalleryRepository;

impl GalleryRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryItem>, ToursError> {
        sqlx::query_as::<_, GalleryItem>("SELECT * FROM gallery ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch gallery: {}", e);
                ToursError::DatabaseError(format!("Fetch gallery failed: {}", e))
            })
    }

    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<GalleryItem>, ToursError> {
        sqlx::query_as::<_, GalleryItem>("SELECT * FROM gallery WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch gallery item {}: {}", id, e);
                ToursError::DatabaseError(format!("Fetch gallery item failed: {}", e))
            })
    }

    pub async fn create(pool: &PgPool, image_url: &str) -> Result<GalleryItem, ToursError> {
        sqlx::query_as::<_, GalleryItem>(
            "INSERT INTO gallery (id, image_url) VALUES ($1, $2) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(image_url)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create gallery item: {}", e);
            ToursError::DatabaseError(format!("Create gallery item failed: {}", e))
        })
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<GalleryItem>, ToursError> {
        sqlx::query_as::<_, GalleryItem>("DELETE FROM gallery WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete gallery item {}: {}", id, e);
                ToursError::DatabaseError(format!("Delete gallery item failed: {}", e))
            })
    }
}
