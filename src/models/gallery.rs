// src/models/gallery.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Uploaded promotional image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: Uuid,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
