// src/handlers/tours.rs
// DOCUMENTATION: HTTP handlers for tour packages
// PURPOSE: Parse requests, call services, return responses

use crate::config::Config;
use crate::errors::ToursError;
use crate::handlers::auth::verify_admin_token;
use crate::handlers::multipart::read_form;
use crate::models::{parse_id, DeleteRequest};
use crate::services::TourService;
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

/// GET /admin/api/tour
/// All tours, newest first
pub async fn list_tours(state: web::Data<AppState>) -> Result<impl Responder, ToursError> {
    let tours = TourService::list_tours(state.catalog.as_ref()).await?;
    Ok(HttpResponse::Ok().json(tours))
}

/// GET /admin/api/tour/{id}
pub async fn get_tour(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder, ToursError> {
    let id = parse_id("Tour", &path.into_inner())?;
    let tour = TourService::get_tour(state.catalog.as_ref(), id).await?;
    Ok(HttpResponse::Ok().json(tour))
}

/// POST /admin/api/tour
/// Create a tour from multipart form data with an optional `image`
pub async fn create_tour(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<impl Responder, ToursError> {
    verify_admin_token(&req, &config)?;

    let form = read_form(payload, config.max_upload_bytes).await?;
    let tour = TourService::create_tour(
        state.catalog.as_ref(),
        state.storage.as_ref(),
        &config.tour_bucket,
        form,
    )
    .await?;

    Ok(HttpResponse::Created().json(tour))
}

/// PATCH /admin/api/tour
/// Update the tour named by the `id` form field
pub async fn update_tour(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<impl Responder, ToursError> {
    verify_admin_token(&req, &config)?;

    let form = read_form(payload, config.max_upload_bytes).await?;
    let tour = TourService::update_tour(
        state.catalog.as_ref(),
        state.storage.as_ref(),
        &config.tour_bucket,
        form,
    )
    .await?;

    Ok(HttpResponse::Ok().json(tour))
}

/// DELETE /admin/api/tour
/// Body: {"id": "<uuid>"}
pub async fn delete_tour(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<impl Responder, ToursError> {
    verify_admin_token(&req, &config)?;

    let id = DeleteRequest::from_body(&body).require_id("Tour")?;
    let tour = TourService::delete_tour(
        state.catalog.as_ref(),
        state.storage.as_ref(),
        &config.tour_bucket,
        id,
    )
    .await?;

    Ok(HttpResponse::Ok().json(tour))
}

/// Configuration for tour routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/admin/api/tour")
            .route(web::get().to(list_tours))
            .route(web::post().to(create_tour))
            .route(web::patch().to(update_tour))
            .route(web::delete().to(delete_tour)),
    )
    .route("/admin/api/tour/{id}", web::get().to(get_tour));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::test_config;
    use crate::db::{Catalog, MemoryCatalog};
    use crate::handlers::test_support::{multipart_body, test_app};
    use crate::services::FailingStorage;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn tour_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", "Umrah Ramadan"),
            ("startDate", "2025-03-01"),
            ("endDate", "2025-03-15"),
            ("price", "1850"),
            ("from", "Karachi"),
            ("to", "Makkah"),
            ("description", "Fifteen nights"),
        ]
    }

    #[actix_rt::test]
    async fn test_tour_lifecycle() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(
            &tour_fields(),
            &[("image", "card one.jpg", "image/jpeg", &b"jpeg-bytes"[..])],
        );
        let req = test::TestRequest::post()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["name"], "Umrah Ramadan");
        assert_eq!(created["from"], "Karachi");
        assert_eq!(created["to"], "Makkah");
        assert_eq!(created["price"], 1850.0);
        let image = created["images"][0].as_str().unwrap().to_string();
        assert!(image.starts_with("http://localhost:3000/storage/v1/object/public/cardPics/tours/"));
        assert!(image.ends_with("_card_one.jpg"));
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/admin/api/tour").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (content_type, body) = multipart_body(&[("id", id.as_str()), ("price", "1999.5")], &[]);
        let req = test::TestRequest::patch()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["price"], 1999.5);
        assert_eq!(updated["name"], "Umrah Ramadan");
        assert_eq!(updated["images"][0], image.as_str());

        let req = test::TestRequest::delete()
            .uri("/admin/api/tour")
            .set_json(json!({ "id": id }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let memory = state.memory_storage.as_ref().unwrap();
        assert_eq!(memory.object_count().await, 0);

        let req = test::TestRequest::get()
            .uri(&format!("/admin/api/tour/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_create_requires_dates() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(&[("name", "No dates")], &[]);
        let req = test::TestRequest::post()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "startDate is required");
    }

    #[actix_rt::test]
    async fn test_failed_upload_writes_no_row() {
        let state = web::Data::new(AppState::new(
            Arc::new(MemoryCatalog::new()),
            Arc::new(FailingStorage),
            None,
            10,
        ));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(
            &tour_fields(),
            &[("image", "card.jpg", "image/jpeg", &b"jpeg-bytes"[..])],
        );
        let req = test::TestRequest::post()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Storage operation failed");

        let tours = state.catalog.list_tours().await.unwrap();
        assert!(tours.is_empty());
    }

    #[actix_rt::test]
    async fn test_delete_without_id() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let req = test::TestRequest::delete()
            .uri("/admin/api/tour")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_admin_token_enforced() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let mut config = test_config();
        config.admin_token = Some("s3cret-token".to_string());
        let config = web::Data::new(config);
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(&tour_fields(), &[]);

        let req = test::TestRequest::post()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type.clone()))
            .set_payload(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type.clone()))
            .insert_header(("X-Admin-Token", "wrong"))
            .set_payload(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::post()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .insert_header(("X-Admin-Token", "s3cret-token"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_rt::test]
    async fn test_update_with_new_image_replaces_old_object() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(
            &tour_fields(),
            &[("image", "old.jpg", "image/jpeg", &b"old-bytes"[..])],
        );
        let req = test::TestRequest::post()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap().to_string();
        let old_url = created["images"][0].as_str().unwrap().to_string();

        let (content_type, body) = multipart_body(
            &[("id", id.as_str())],
            &[("image", "new.png", "image/png", &b"new-bytes"[..])],
        );
        let req = test::TestRequest::patch()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: Value = test::read_body_json(resp).await;
        let images = updated["images"].as_array().unwrap();
        assert_eq!(images.len(), 1);
        let new_url = images[0].as_str().unwrap();
        assert_ne!(new_url, old_url);
        assert!(new_url.ends_with("_new.png"));
        assert_eq!(updated["name"], "Umrah Ramadan");

        let memory = state.memory_storage.as_ref().unwrap();
        assert_eq!(memory.object_count().await, 1);

        let old_path = old_url.trim_start_matches("http://localhost:3000");
        let req = test::TestRequest::get().uri(old_path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_update_requires_known_id() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let (content_type, body) = multipart_body(&[("price", "100")], &[]);
        let req = test::TestRequest::patch()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Tour id is required");

        let (content_type, body) = multipart_body(
            &[("id", "0b8e4a52-7a36-4c51-9d0e-1f3f4f2f6a11"), ("price", "100")],
            &[],
        );
        let req = test::TestRequest::patch()
            .uri("/admin/api/tour")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Tour not found");
    }

    #[actix_rt::test]
    async fn test_get_with_malformed_id() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/admin/api/tour/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_INPUT");
    }
}
