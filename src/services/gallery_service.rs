// src/services/gallery_service.rs
// DOCUMENTATION: Business logic for gallery images

use crate::db::Catalog;
use crate::errors::ToursError;
use crate::models::{gallery_object_key, FormData, GalleryItem};
use crate::services::{remove_public_urls, upload_public, ObjectStorage};
use chrono::Utc;
use uuid::Uuid;

pub struct GalleryService;

impl GalleryService {
    pub async fn list_items(catalog: &dyn Catalog) -> Result<Vec<GalleryItem>, ToursError> {
        catalog.list_gallery().await
    }

    /// Upload the `image` file part and record its public URL
    pub async fn create_item(
        catalog: &dyn Catalog,
        storage: &dyn ObjectStorage,
        bucket: &str,
        mut form: FormData,
    ) -> Result<GalleryItem, ToursError> {
        let image = form
            .take_file("image")
            .ok_or_else(|| ToursError::InvalidInput("Image file is required".to_string()))?;

        let path = gallery_object_key(Utc::now().timestamp_millis(), &image.safe_name());
        let url = upload_public(storage, bucket, &path, image).await.map_err(|e| {
            log::error!("Error uploading image: {}", e);
            e
        })?;

        let item = catalog.create_gallery_item(&url).await?;
        log::info!("Created gallery item {}", item.id);
        Ok(item)
    }

    /// Delete a gallery row, removing its object best-effort first
    pub async fn delete_item(
        catalog: &dyn Catalog,
        storage: &dyn ObjectStorage,
        bucket: &str,
        id: Uuid,
    ) -> Result<GalleryItem, ToursError> {
        let not_found = || ToursError::NotFound("Gallery item not found".to_string());

        let item = catalog.get_gallery_item(id).await?.ok_or_else(not_found)?;
        remove_public_urls(storage, bucket, &[item.image_url.clone()]).await;

        catalog.delete_gallery_item(id).await?.ok_or_else(not_found)
    }
}
