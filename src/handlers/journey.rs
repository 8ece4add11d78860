// src/handlers/journey.rs
// DOCUMENTATION: HTTP handlers for journey media (images and videos)
// PURPOSE: Admin upload/delete plus the public read-only listing

use crate::config::Config;
use crate::errors::ToursError;
use crate::handlers::auth::verify_admin_token;
use crate::handlers::multipart::read_form;
use crate::models::DeleteRequest;
use crate::services::JourneyService;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

/// GET /admin/api/journey and GET /api/journey
pub async fn list_journey(state: web::Data<AppState>) -> Result<impl Responder, ToursError> {
    let items = JourneyService::list_items(state.catalog.as_ref()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// POST /admin/api/journey
/// Multipart with a required `file` part holding an image or a video
pub async fn create_journey_item(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<impl Responder, ToursError> {
    verify_admin_token(&req, &config)?;

    let form = read_form(payload, config.max_upload_bytes).await?;
    let item = JourneyService::create_item(
        state.catalog.as_ref(),
        state.storage.as_ref(),
        &config.journey_bucket,
        form,
    )
    .await?;

    Ok(HttpResponse::Created().json(item))
}

/// DELETE /admin/api/journey
/// Body: {"id": "<uuid>"}, a body that is not JSON counts as a missing id
pub async fn delete_journey_item(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<impl Responder, ToursError> {
    verify_admin_token(&req, &config)?;

    let id = DeleteRequest::from_body(&body).require_id("Journey item")?;
    let item = JourneyService::delete_item(
        state.catalog.as_ref(),
        state.storage.as_ref(),
        &config.journey_bucket,
        id,
    )
    .await?;

    Ok(HttpResponse::Ok().json(item))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin/api/journey")
            .route(web::get().to(list_journey))
            .route(web::post().to(create_journey_item))
            .route(web::delete().to(delete_journey_item)),
    )
    .route("/api/journey", web::get().to(list_journey));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::test_config;
    use crate::db::{Catalog, MemoryCatalog};
    use crate::handlers::test_support::{multipart_body, test_app};
    use crate::models::{CreateJourneyItemRequest, MediaType};
    use crate::services::FailingStorage;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_rt::test]
    async fn test_video_upload_is_public() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(
            &[],
            &[("file", "tawaf clip.mp4", "video/mp4", &b"mp4-bytes"[..])],
        );
        let req = test::TestRequest::post()
            .uri("/admin/api/journey")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let item: Value = test::read_body_json(resp).await;
        assert_eq!(item["mediaType"], "video");
        assert_eq!(item["fileName"], "tawaf_clip.mp4");
        assert!(item["mediaUrl"]
            .as_str()
            .unwrap()
            .contains("/public/journey/journey/videos/"));

        let req = test::TestRequest::get().uri("/api/journey").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], item["id"]);
    }

    #[actix_rt::test]
    async fn test_rejects_unsupported_type() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(
            &[],
            &[("file", "notes.pdf", "application/pdf", &b"%PDF"[..])],
        );
        let req = test::TestRequest::post()
            .uri("/admin/api/journey")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid file type"));

        let memory = state.memory_storage.as_ref().unwrap();
        assert_eq!(memory.object_count().await, 0);
    }

    #[actix_rt::test]
    async fn test_delete_errors() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let req = test::TestRequest::delete()
            .uri("/admin/api/journey")
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Journey item id is required");

        let req = test::TestRequest::delete()
            .uri("/admin/api/journey")
            .set_json(json!({ "id": "0b8e4a52-7a36-4c51-9d0e-1f3f4f2f6a11" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Journey item not found");
    }

    #[actix_rt::test]
    async fn test_delete_survives_storage_failure() {
        let catalog = Arc::new(MemoryCatalog::new());
        let item = catalog
            .create_journey_item(&CreateJourneyItemRequest {
                media_url: "http://failing.invalid/storage/v1/object/public/journey/journey/images/1_a.png"
                    .to_string(),
                media_type: MediaType::Image,
                file_name: "a.png".to_string(),
            })
            .await
            .unwrap();

        let state = web::Data::new(AppState::new(catalog, Arc::new(FailingStorage), None, 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let req = test::TestRequest::delete()
            .uri("/admin/api/journey")
            .set_json(json!({ "id": item.id }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert!(state.catalog.list_journey().await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_failed_upload_writes_no_row() {
        let catalog = Arc::new(MemoryCatalog::new());
        let state = web::Data::new(AppState::new(
            catalog.clone(),
            Arc::new(FailingStorage),
            None,
            10,
        ));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(
            &[],
            &[("file", "pic.png", "image/png", &b"png-bytes"[..])],
        );
        let req = test::TestRequest::post()
            .uri("/admin/api/journey")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Storage operation failed");
        assert!(catalog.list_journey().await.unwrap().is_empty());
    }
}
