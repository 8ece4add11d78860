// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoint to verify service status

use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "sibtaini-tours",
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": state.catalog.backend(),
        "storage": state.storage.backend()
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::test_config;
    use crate::handlers::test_support::test_app;
    use actix_web::test;
    use serde_json::Value;

    #[actix_rt::test]
    async fn test_health_reports_backends() {
        let state = web::Data::new(AppState::in_memory("http://localhost:3000", 10));
        let config = web::Data::new(test_config());
        let app = test_app!(state, config);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalog"], "memory");
        assert_eq!(body["storage"], "memory");
    }
}
