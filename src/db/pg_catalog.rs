// src/db/pg_catalog.rs
// DOCUMENTATION: PostgreSQL-backed Catalog
// PURPOSE: Route Catalog calls to the sqlx repositories

use crate::db::{Catalog, GalleryRepository, JourneyRepository, TourRepository};
use crate::errors::ToursError;
use crate::models::{
    CreateJourneyItemRequest, CreateTourRequest, GalleryItem, JourneyItem, Tour, UpdateTourRequest,
};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list_tours(&self) -> Result<Vec<Tour>, ToursError> {
        TourRepository::list(&self.pool).await
    }

    async fn get_tour(&self, id: Uuid) -> Result<Option<Tour>, ToursError> {
        TourRepository::get_by_id(&self.pool, id).await
    }

    async fn create_tour(&self, req: &CreateTourRequest) -> Result<Tour, ToursError> {
        TourRepository::create(&self.pool, req).await
    }

    async fn update_tour(
        &self,
        id: Uuid,
        req: &UpdateTourRequest,
    ) -> Result<Option<Tour>, ToursError> {
        TourRepository::update(&self.pool, id, req).await
    }

    async fn delete_tour(&self, id: Uuid) -> Result<Option<Tour>, ToursError> {
        TourRepository::delete(&self.pool, id).await
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryItem>, ToursError> {
        GalleryRepository::list(&self.pool).await
    }

    async fn create_gallery_item(&self, image_url: &str) -> Result<GalleryItem, ToursError> {
        GalleryRepository::create(&self.pool, image_url).await
    }

    async fn delete_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>, ToursError> {
        GalleryRepository::delete(&self.pool, id).await
    }

    async fn get_gallery_item(&self, id: Uuid) -> Result<Option<GalleryItem>, ToursError> {
        GalleryRepository::get_by_id(&self.pool, id).await
    }

    async fn list_journey(&self) -> Result<Vec<JourneyItem>, ToursError> {
        JourneyRepository::list(&self.pool).await
    }

    async fn get_journey_item(&self, id: Uuid) -> Result<Option<JourneyItem>, ToursError> {
        JourneyRepository::get_by_id(&self.pool, id).await
    }

    async fn create_journey_item(
        &self,
        req: &CreateJourneyItemRequest,
    ) -> Result<JourneyItem, ToursError> {
        JourneyRepository::create(&self.pool, req).await
    }

    async fn delete_journey_item(&self, id: Uuid) -> Result<Option<JourneyItem>, ToursError> {
        JourneyRepository::delete(&self.pool, id).await
    }
}
