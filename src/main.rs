// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, backends, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod state;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use state::AppState;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting sibtaini-tours service...");
    log::info!("Environment: {}", config.environment);

    // 4. Connect catalog and storage backends
    let state = match AppState::from_config(&config).await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to initialize backends: {:#}", e);
            std::process::exit(1);
        }
    };

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    log::info!("Listening on {}", server_addr);
    config::log_reachable_urls(&config.server_address, config.server_port);

    let app_config = web::Data::new(config);

    HttpServer::new(move || {
        let cors = match app_config.cors_allowed_origin.as_deref() {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
            None => Cors::permissive(),
        };

        App::new()
            // Application state (backends and config)
            .app_data(state.clone())
            .app_data(app_config.clone())
            // Middleware
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::configure)
    })
    .bind(&server_addr)?
    .run()
    .await
}
