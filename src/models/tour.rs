// src/models/tour.rs
// DOCUMENTATION: Tour (travel package) records and request DTOs
// PURPOSE: Map multipart form fields to validated inserts and updates

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::FormData;
use crate::errors::ToursError;

/// A bookable travel itinerary
/// DOCUMENTATION: Maps directly to the tours table; JSON uses camelCase keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: Uuid,

    /// Package name shown on cards
    pub name: String,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    /// Price per person
    pub price: f64,

    /// Departure city
    #[serde(rename = "from")]
    pub from_location: String,

    /// Destination
    #[serde(rename = "to")]
    pub to_location: String,

    pub description: String,

    /// Public URLs of the card images
    pub images: Vec<String>,

    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating a tour
/// DOCUMENTATION: Built from POST /admin/api/tour form fields
#[derive(Debug, Clone, Validate)]
pub struct CreateTourRequest {
    #[validate(length(min = 1, max = 255, message = "Tour name is required"))]
    pub name: String,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    pub from_location: String,
    pub to_location: String,
    pub description: String,

    /// Filled in by the service after the image upload
    pub images: Vec<String>,
}

/// Request DTO for updating a tour
/// DOCUMENTATION: Built from PATCH /admin/api/tour form fields
/// All fields are optional - only provided fields are updated
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateTourRequest {
    #[validate(length(min = 1, max = 255, message = "Tour name cannot be empty"))]
    pub name: Option<String>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,

    pub from_location: Option<String>,
    pub to_location: Option<String>,
    pub description: Option<String>,

    /// Replaces the whole image list when set
    pub images: Option<Vec<String>>,
}

impl CreateTourRequest {
    /// Read create fields from a multipart form
    /// `from` falls back to the older `location` field name
    pub fn from_form(form: &FormData) -> Result<Self, ToursError> {
        let name = form.non_empty("name").unwrap_or_default().to_string();

        let start_date = form
            .non_empty("startDate")
            .ok_or_else(|| ToursError::InvalidInput("startDate is required".to_string()))
            .and_then(|v| parse_tour_date("startDate", v))?;

        let end_date = form
            .non_empty("endDate")
            .ok_or_else(|| ToursError::InvalidInput("endDate is required".to_string()))
            .and_then(|v| parse_tour_date("endDate", v))?;

        let price = match form.non_empty("price") {
            Some(raw) => parse_price(raw)?,
            None => 0.0,
        };

        let req = CreateTourRequest {
            name,
            start_date,
            end_date,
            price,
            from_location: from_field(form).unwrap_or_default().to_string(),
            to_location: form.text("to").unwrap_or_default().trim().to_string(),
            description: form.text("description").unwrap_or_default().trim().to_string(),
            images: Vec::new(),
        };

        req.validate()?;
        Ok(req)
    }
}

impl UpdateTourRequest {
    /// Read update fields from a multipart form
    /// Fields that are absent keep their stored values
    pub fn from_form(form: &FormData) -> Result<Self, ToursError> {
        let req = UpdateTourRequest {
            name: form.text("name").map(|v| v.trim().to_string()),
            start_date: form
                .non_empty("startDate")
                .map(|v| parse_tour_date("startDate", v))
                .transpose()?,
            end_date: form
                .non_empty("endDate")
                .map(|v| parse_tour_date("endDate", v))
                .transpose()?,
            price: form.non_empty("price").map(parse_price).transpose()?,
            from_location: from_field(form).map(str::to_string),
            to_location: form.text("to").map(|v| v.trim().to_string()),
            description: form.text("description").map(|v| v.trim().to_string()),
            images: None,
        };

        req.validate()?;
        Ok(req)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.price.is_none()
            && self.from_location.is_none()
            && self.to_location.is_none()
            && self.description.is_none()
            && self.images.is_none()
    }
}

impl Tour {
    /// Apply an update in place (used by the in-memory catalog)
    pub fn apply(&mut self, update: &UpdateTourRequest) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(start) = update.start_date {
            self.start_date = start;
        }
        if let Some(end) = update.end_date {
            self.end_date = end;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(from) = &update.from_location {
            self.from_location = from.clone();
        }
        if let Some(to) = &update.to_location {
            self.to_location = to.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(images) = &update.images {
            self.images = images.clone();
        }
    }
}

fn from_field(form: &FormData) -> Option<&str> {
    form.non_empty("from").or_else(|| form.non_empty("location"))
}

/// Parse a tour date from a form field
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` (UTC) and `YYYY-MM-DD` (midnight UTC)
pub fn parse_tour_date(field: &str, raw: &str) -> Result<DateTime<Utc>, ToursError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| ToursError::InvalidInput(format!("{} is not a valid date: {}", field, raw)))
}

fn parse_price(raw: &str) -> Result<f64, ToursError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ToursError::InvalidInput(format!("price is not a number: {}", raw)))
}
