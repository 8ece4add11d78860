// src/db/tour_repository.rs
// DOCUMENTATION: Tour database operations
// PURPOSE: All SQL touching the tours table

use crate::errors::ToursError;
use crate::models::{CreateTourRequest, Tour, UpdateTourRequest};
use sqlx::PgPool;
use uuid::Uuid;

pub struct TourRepository;

impl TourRepository {
    /// All tours, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<Tour>, ToursError> {
        sqlx::query_as::<_, Tour>("SELECT * FROM tours ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch tours: {}", e);
                ToursError::DatabaseError(format!("Fetch tours failed: {}", e))
            })
    }

    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Tour>, ToursError> {
        sqlx::query_as::<_, Tour>("SELECT * FROM tours WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch tour {}: {}", id, e);
                ToursError::DatabaseError(format!("Fetch tour failed: {}", e))
            })
    }

    /// Insert a tour and return the stored row
    pub async fn create(pool: &PgPool, req: &CreateTourRequest) -> Result<Tour, ToursError> {
        let tour = sqlx::query_as::<_, Tour>(
            r#"
            INSERT INTO tours (
                id, name, start_date, end_date, price,
                from_location, to_location, description, images
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4()) // $1
        .bind(&req.name) // $2
        .bind(req.start_date) // $3
        .bind(req.end_date) // $4
        .bind(req.price) // $5
        .bind(&req.from_location) // $6
        .bind(&req.to_location) // $7
        .bind(&req.description) // $8
        .bind(&req.images) // $9
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create tour: {}", e);
            ToursError::DatabaseError(format!("Create tour failed: {}", e))
        })?;

        log::info!("Created tour with id: {}", tour.id);
        Ok(tour)
    }

    /// Update the provided fields, None when the tour does not exist
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateTourRequest,
    ) -> Result<Option<Tour>, ToursError> {
        sqlx::query_as::<_, Tour>(
            r#"
            UPDATE tours
            SET name = COALESCE($2, name),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                price = COALESCE($5, price),
                from_location = COALESCE($6, from_location),
                to_location = COALESCE($7, to_location),
                description = COALESCE($8, description),
                images = COALESCE($9, images)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(req.price)
        .bind(&req.from_location)
        .bind(&req.to_location)
        .bind(&req.description)
        .bind(&req.images)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to update tour {}: {}", id, e);
            ToursError::DatabaseError(format!("Update tour failed: {}", e))
        })
    }

    /// Delete a tour, returning the removed row
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<Option<Tour>, ToursError> {
        sqlx::query_as::<_, Tour>("DELETE FROM tours WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete tour {}: {}", id, e);
                ToursError::DatabaseError(format!("Delete tour failed: {}", e))
            })
    }
}
