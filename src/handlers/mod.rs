// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and register every route

pub mod auth;
pub mod gallery;
pub mod health;
pub mod journey;
pub mod multipart;
pub mod storage;
pub mod tours;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::config as auth_config;
pub use gallery::config as gallery_config;
pub use health::config as health_config;
pub use journey::config as journey_config;
pub use storage::config as storage_config;
pub use tours::config as tours_config;

use crate::errors::ToursError;
use actix_web::web;

/// All routes plus JSON extractor errors rendered as ToursError bodies
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ToursError::InvalidInput(err.to_string()).into()),
    )
    .configure(health_config)
    .configure(auth_config)
    .configure(tours_config)
    .configure(gallery_config)
    .configure(journey_config)
    .configure(storage_config);
}
