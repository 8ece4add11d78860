// src/services/tour_service.rs
// DOCUMENTATION: Business logic for tours
// PURPOSE: Intermediary between handlers, the catalog and object storage

use crate::db::Catalog;
use crate::errors::ToursError;
use crate::models::{
    parse_id, random_suffix, tour_object_key, CreateTourRequest, FormData, Tour,
    UpdateTourRequest, UploadedFile,
};
use crate::services::{remove_public_urls, upload_public, ObjectStorage};
use chrono::Utc;
use uuid::Uuid;

fn tour_not_found() -> ToursError {
    ToursError::NotFound("Tour not found".to_string())
}

pub struct TourService;

impl TourService {
    /// All tours, newest first
    pub async fn list_tours(catalog: &dyn Catalog) -> Result<Vec<Tour>, ToursError> {
        catalog.list_tours().await
    }

    pub async fn get_tour(catalog: &dyn Catalog, id: Uuid) -> Result<Tour, ToursError> {
        catalog.get_tour(id).await?.ok_or_else(tour_not_found)
    }

    /// Create a tour from form fields, uploading the optional `image` first
    pub async fn create_tour(
        catalog: &dyn Catalog,
        storage: &dyn ObjectStorage,
        bucket: &str,
        mut form: FormData,
    ) -> Result<Tour, ToursError> {
        let mut req = CreateTourRequest::from_form(&form)?;

        if let Some(image) = form.take_file("image") {
            let url = Self::upload_image(storage, bucket, image).await?;
            req.images = vec![url];
        }

        catalog.create_tour(&req).await
    }

    /// Update a tour identified by the `id` form field
    /// A new `image` replaces the stored images, the old objects are removed best-effort
    pub async fn update_tour(
        catalog: &dyn Catalog,
        storage: &dyn ObjectStorage,
        bucket: &str,
        mut form: FormData,
    ) -> Result<Tour, ToursError> {
        let id = form
            .non_empty("id")
            .ok_or_else(|| ToursError::InvalidInput("Tour id is required".to_string()))
            .and_then(|raw| parse_id("Tour", raw))?;

        let mut req = UpdateTourRequest::from_form(&form)?;
        let existing = Self::get_tour(catalog, id).await?;

        let mut replaced_images = Vec::new();
        if let Some(image) = form.take_file("image") {
            let url = Self::upload_image(storage, bucket, image).await?;
            req.images = Some(vec![url]);
            replaced_images = existing.images.clone();
        }

        if req.is_empty() {
            return Ok(existing);
        }

        let updated = catalog.update_tour(id, &req).await?.ok_or_else(tour_not_found)?;
        remove_public_urls(storage, bucket, &replaced_images).await;

        log::info!("Updated tour {}", id);
        Ok(updated)
    }

    /// Delete a tour and, best-effort, its image objects
    pub async fn delete_tour(
        catalog: &dyn Catalog,
        storage: &dyn ObjectStorage,
        bucket: &str,
        id: Uuid,
    ) -> Result<Tour, ToursError> {
        let tour = Self::get_tour(catalog, id).await?;
        remove_public_urls(storage, bucket, &tour.images).await;

        let deleted = catalog.delete_tour(id).await?.ok_or_else(tour_not_found)?;
        log::info!("Deleted tour {}", id);
        Ok(deleted)
    }

    async fn upload_image(
        storage: &dyn ObjectStorage,
        bucket: &str,
        image: UploadedFile,
    ) -> Result<String, ToursError> {
        let path = tour_object_key(
            Utc::now().timestamp_millis(),
            &random_suffix(),
            &image.safe_name(),
        );

        upload_public(storage, bucket, &path, image).await.map_err(|e| {
            log::error!("Image upload error: {}", e);
            e
        })
    }
}
