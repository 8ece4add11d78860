// src/handlers/gallery.rs
// DOCUMENTATION: HTTP handlers for gallery images

use crate::config::Config;
use crate::errors::ToursError;
use crate::handlers::auth::verify_admin_token;
use crate::handlers::multipart::read_form;
use crate::models::DeleteRequest;
use crate::services::GalleryService;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

/// GET /admin/api/gallery
pub async fn list_gallery(state: web::Data<AppState>) -> Result<impl Responder, ToursError> {
    let items = GalleryService::list_items(state.catalog.as_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// POST /admin/api/gallery
/// Multipart with a required `image` file part
pub async fn create_gallery_item(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<impl Responder, ToursError> {
    verify_admin_token(&req, &config)?;

    let form = read_form(payload, config.max_upload_bytes).await?;
    let item = GalleryService::create_item(
        state.catalog.as_ref(),
        state.storage.as_ref(),
        &config.gallery_bucket,
        form,
    )
    .await?;

    Ok(HttpResponse::Created().json(item))
}

/// DELETE /admin/api/gallery
pub async fn delete_gallery_item(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<impl Responder, ToursError> {
    verify_admin_token(&req, &config)?;

    let id = DeleteRequest::from_body(&body).require_id("Gallery item")?;
    let item = GalleryService::delete_item(
        state.catalog.as_ref(),
        state.storage.as_ref(),
        &config.gallery_bucket,
        id,
    )
    .await?;

    Ok(HttpResponse::Ok().json(item))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin/api/gallery")
            .route(web::get().to(list_gallery))
            .route(web::post().to(create_gallery_item))
            .route(web::delete().to(delete_gallery_item)),
    );
}
