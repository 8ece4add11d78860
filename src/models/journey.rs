// src/models/journey.rs
// DOCUMENTATION: Journey items - photos and videos from past trips

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MediaType;

/// Uploaded image or video documenting a past trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyItem {
    pub id: Uuid,

    /// Public URL of the stored object
    pub media_url: String,

    pub media_type: MediaType,

    /// Sanitized name of the uploaded file
    pub file_name: String,

    pub created_at: DateTime<Utc>,
}

/// Values needed to insert a journey row
#[derive(Debug, Clone)]
pub struct CreateJourneyItemRequest {
    pub media_url: String,
    pub media_type: MediaType,
    pub file_name: String,
}
