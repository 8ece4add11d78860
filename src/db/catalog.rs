// src/db/catalog.rs
// DOCUMENTATION: Storage-agnostic interface over the three resource tables
// PURPOSE: Lets handlers run against PostgreSQL or the in-memory prototype store

use crate::errors::ToursError;
use crate::models::{
    CreateJourneyItemRequest, CreateTourRequest, GalleryItem, JourneyItem, Tour, UpdateTourRequest,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Row access for tours, gallery items and journey items
/// Lookups and deletes return None when no row has the id
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Short backend name reported by /health
    fn backend(&self) -> &'static str;

    async fn list_tours(&self) -> Result<Vec<Tour>, ToursError>;
    async fn get_tour(&self, id: Uuid) -> Result<Option<Tour>, ToursError>;
    async fn create_tour(&self, req: &CreateTourRequest) -> Result<Tour, ToursError>;
    async fn update_tour(
        &self,
        id: Uuid,
        req: &UpdateTourRequest,
    ) -> Result<Option<Tour>, ToursError>;
    async fn delete_tour(&self, id: Uuid) -> Result<Option<Tour>, ToursError>;

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ToursError>;
    async fn create_gallery_item(&self, image_url: &str) -> Result<GalleryItem, ToursError>;
    async fn delete_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>, ToursError>;
    async fn get_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>, ToursError>;

    async fn list_journey(&self) -> Result<Vec<JourneyItem>, ToursError>;
    async fn get_journey_item(&self, id: Uuid) -> Result<Option<JourneyItem>, ToursError>;
    async fn create_journey_item(
        &self,
        req: &CreateJourneyItemRequest,
    ) -> Result<JourneyItem, ToursError>;
    async fn delete_journey_item(&self, id: Uuid) -> Result<Option<JourneyItem>, ToursError>;
}
