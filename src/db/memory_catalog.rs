// src/db/memory_catalog.rs
// DOCUMENTATION: In-memory Catalog used when no database is configured
// PURPOSE: Prototype backend for local development and handler tests

use crate::db::Catalog;
use crate::errors::ToursError;
use crate::models::{
    CreateJourneyItemRequest, CreateTourRequest, GalleryItem, JourneyItem, Tour, UpdateTourRequest,
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Rows live in vectors kept newest first, so listing is a clone
#[derive(Default)]
pub struct MemoryCatalog {
    tours: RwLock<Vec<Tour>>,
    gallery: RwLock<Vec<GalleryItem>>,
    journey: RwLock<Vec<JourneyItem>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Remove and return the first matching row
fn take_by<T>(rows: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> Option<T> {
    let index = rows.iter().position(matches)?;
    Some(rows.remove(index))
}

#[async_trait]
impl Catalog for MemoryCatalog {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_tours(&self) -> Result<Vec<Tour>, ToursError> {
        Ok(self.tours.read().await.clone())
    }

    async fn get_tour(&self, id: Uuid) -> Result<Option<Tour>, ToursError> {
        Ok(self.tours.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn create_tour(&self, req: &CreateTourRequest) -> Result<Tour, ToursError> {
        let tour = Tour {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            start_date: req.start_date,
            end_date: req.end_date,
            price: req.price,
            from_location: req.from_location.clone(),
            to_location: req.to_location.clone(),
            description: req.description.clone(),
            images: req.images.clone(),
            created_at: Utc::now(),
        };

        self.tours.write().await.insert(0, tour.clone());
        log::info!("Created tour with id: {}", tour.id);
        Ok(tour)
    }

    async fn update_tour(
        &self,
        id: Uuid,
        req: &UpdateTourRequest,
    ) -> Result<Option<Tour>, ToursError> {
        let mut tours = self.tours.write().await;
        Ok(tours.iter_mut().find(|t| t.id == id).map(|tour| {
            tour.apply(req);
            tour.clone()
        }))
    }

    async fn delete_tour(&self, id: Uuid) -> Result<Option<Tour>, ToursError> {
        Ok(take_by(&mut *self.tours.write().await, |t| t.id == id))
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ToursError> {
        Ok(self.gallery.read().await.clone())
    }

    async fn create_gallery_item(&self, image_url: &str) -> Result<GalleryItem, ToursError> {
        let item = GalleryItem {
            id: Uuid::new_v4(),
            image_url: image_url.to_string(),
            created_at: Utc::now(),
        };

        self.gallery.write().await.insert(0, item.clone());
        Ok(item)
    }

    async fn delete_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>, ToursError> {
        Ok(take_by(&mut *self.gallery.write().await, |g| g.id == id))
    }

    async fn get_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>, ToursError> {
        Ok(self.gallery.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn list_journey(&self) -> Result<Vec<JourneyItem>, ToursError> {
        Ok(self.journey.read().await.clone())
    }

    async fn get_journey_item(&self, id: Uuid) -> Result<Option<JourneyItem>, ToursError> {
        Ok(self.journey.read().await.iter().find(|j| j.id == id).cloned())
    }

    async fn create_journey_item(
        &self,
        req: &CreateJourneyItemRequest,
    ) -> Result<JourneyItem, ToursError> {
        let item = JourneyItem {
            id: Uuid::new_v4(),
            media_url: req.media_url.clone(),
            media_type: req.media_type,
            file_name: req.file_name.clone(),
            created_at: Utc::now(),
        };

        self.journey.write().await.insert(0, item.clone());
        Ok(item)
    }

    async fn delete_journey_item(&self, id: Uuid) -> Result<Option<JourneyItem>, ToursError> {
        Ok(take_by(&mut *self.journey.write().await, |j| j.id == id))
    }
}
