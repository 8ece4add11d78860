// src/handlers/storage.rs
// DOCUMENTATION: Serves objects kept by the in-memory storage backend
// PURPOSE: Makes public URLs resolvable during local development

use crate::errors::ToursError;
use crate::state::AppState;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::{web, HttpResponse};

/// GET /storage/v1/object/public/{bucket}/{path}
pub async fn get_public_object(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ToursError> {
    let (bucket, key) = path.into_inner();
    let not_found = || ToursError::NotFound("Object not found".to_string());

    let storage = state.memory_storage.as_ref().ok_or_else(not_found)?;
    let object = storage.get(&bucket, &key).await.ok_or_else(not_found)?;

    Ok(HttpResponse::Ok()
        .content_type(object.content_type)
        .insert_header((CACHE_CONTROL, "max-age=3600"))
        .body(object.bytes))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/storage/v1/object/public/{bucket}/{path:.*}",
        web::get().to(get_public_object),
    );
}
