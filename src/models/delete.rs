// src/models/delete.rs

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ToursError;

/// JSON body of the DELETE routes: {"id": "..."}
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl DeleteRequest {
    /// Lenient body parsing: anything that is not a JSON object counts as "no id"
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Resolve the id, `what` names the resource in the error message
    pub fn require_id(&self, what: &str) -> Result<Uuid, ToursError> {
        let raw = match &self.id {
            Some(serde_json::Value::String(s)) => s.trim(),
            Some(serde_json::Value::Null) | None => "",
            Some(other) => {
                return Err(ToursError::InvalidInput(format!("Invalid {} id: {}", what, other)))
            }
        };

        if raw.is_empty() {
            return Err(ToursError::InvalidInput(format!("{} id is required", what)));
        }

        parse_id(what, raw)
    }
}

/// Parse a UUID from a path segment or form field
pub fn parse_id(what: &str, raw: &str) -> Result<Uuid, ToursError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ToursError::InvalidInput(format!("Invalid {} id: {}", what, raw)))
}
