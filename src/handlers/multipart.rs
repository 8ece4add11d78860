// src/handlers/multipart.rs
// DOCUMENTATION: Multipart form reading
// PURPOSE: Turn an upload request into text fields and file buffers

use crate::errors::ToursError;
use crate::models::{FormData, UploadedFile};
use actix_multipart::{Multipart, MultipartError};
use futures_util::TryStreamExt;

fn bad_multipart(e: MultipartError) -> ToursError {
    log::warn!("Malformed multipart request: {}", e);
    ToursError::InvalidInput(format!("Invalid form data: {}", e))
}

/// Read every part of a multipart request into memory
/// DOCUMENTATION: Fails with 413 once the combined part bodies exceed `limit` bytes.
/// A file part with an empty name and empty body (untouched file input) is skipped.
pub async fn read_form(mut payload: Multipart, limit: usize) -> Result<FormData, ToursError> {
    let mut form = FormData::default();
    let mut total = 0usize;

    while let Some(mut field) = payload.try_next().await.map_err(bad_multipart)? {
        let disposition = field.content_disposition();
        let name = disposition.get_name().map(str::to_string);
        let file_name = disposition.get_filename().map(str::to_string);
        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
            total += chunk.len();
            if total > limit {
                return Err(ToursError::PayloadTooLarge(limit));
            }
            bytes.extend_from_slice(&chunk);
        }

        let Some(name) = name else {
            continue;
        };

        match file_name {
            Some(file_name) => {
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.files.insert(
                    name,
                    UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    },
                );
            }
            None => {
                let value = String::from_utf8(bytes).map_err(|_| {
                    ToursError::InvalidInput(format!("Field {} is not valid UTF-8", name))
                })?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}
