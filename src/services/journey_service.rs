// src/services/journey_service.rs
// DOCUMENTATION: Business logic for journey media
// PURPOSE: Validate media type, upload to the journey bucket, keep rows in sync

use crate::db::Catalog;
use crate::errors::ToursError;
use crate::models::{journey_object_key, CreateJourneyItemRequest, FormData, JourneyItem, MediaType};
use crate::services::{remove_public_urls, upload_public, ObjectStorage};
use chrono::Utc;
use uuid::Uuid;

const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Only images (JPEG, PNG, GIF, WebP) and videos (MP4, WebM, OGG, MOV) are allowed";

pub struct JourneyService;

impl JourneyService {
    pub async fn list_items(catalog: &dyn Catalog) -> Result<Vec<JourneyItem>, ToursError> {
        catalog.list_journey().await
    }

    /// Upload the `file` part (image or video) and record it
    pub async fn create_item(
        catalog: &dyn Catalog,
        storage: &dyn ObjectStorage,
        bucket: &str,
        mut form: FormData,
    ) -> Result<JourneyItem, ToursError> {
        let file = form
            .take_file("file")
            .ok_or_else(|| ToursError::InvalidInput("File is required".to_string()))?;

        let media_type = MediaType::from_content_type(&file.content_type)
            .ok_or_else(|| ToursError::InvalidInput(INVALID_TYPE_MESSAGE.to_string()))?;

        let file_name = file.safe_name();
        let path = journey_object_key(media_type, Utc::now().timestamp_millis(), &file_name);

        let media_url = upload_public(storage, bucket, &path, file).await.map_err(|e| {
            log::error!("Error uploading file: {}", e);
            e
        })?;

        let item = catalog
            .create_journey_item(&CreateJourneyItemRequest {
                media_url,
                media_type,
                file_name,
            })
            .await?;

        log::info!("Created journey {} item {}", item.media_type, item.id);
        Ok(item)
    }

    /// Delete a journey row and, best-effort, its stored object
    pub async fn delete_item(
        catalog: &dyn Catalog,
        storage: &dyn ObjectStorage,
        bucket: &str,
        id: Uuid,
    ) -> Result<JourneyItem, ToursError> {
        let not_found = || ToursError::NotFound("Journey item not found".to_string());

        let item = catalog.get_journey_item(id).await?.ok_or_else(not_found)?;
        remove_public_urls(storage, bucket, &[item.media_url.clone()]).await;

        catalog.delete_journey_item(id).await?.ok_or_else(not_found)
    }
}
