// src/state.rs
// DOCUMENTATION: Shared application state
// PURPOSE: Pick the catalog and storage backends once at startup

use crate::config::{self, Config};
use crate::db::{Catalog, MemoryCatalog, PgCatalog};
use crate::services::{MemoryStorage, ObjectStorage, SupabaseStorage};
use anyhow::Context;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Backends shared by every worker
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub storage: Arc<dyn ObjectStorage>,
    /// Set when objects are kept in process, so they can be served back
    pub memory_storage: Option<Arc<MemoryStorage>>,
    /// Global quota on back office login attempts
    pub login_limiter: DefaultDirectRateLimiter,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        storage: Arc<dyn ObjectStorage>,
        memory_storage: Option<Arc<MemoryStorage>>,
        login_attempts_per_minute: u32,
    ) -> Self {
        let per_minute = NonZeroU32::new(login_attempts_per_minute).unwrap_or(NonZeroU32::MIN);

        Self {
            catalog,
            storage,
            memory_storage,
            login_limiter: RateLimiter::direct(Quota::per_minute(per_minute)),
        }
    }

    /// In-memory catalog and storage, objects served from `public_base_url`
    #[cfg(test)]
    pub fn in_memory(public_base_url: &str, login_attempts_per_minute: u32) -> Self {
        let storage = Arc::new(MemoryStorage::new(public_base_url));
        Self::new(
            Arc::new(MemoryCatalog::new()),
            storage.clone(),
            Some(storage),
            login_attempts_per_minute,
        )
    }

    /// Connect the configured backends, falling back to in-memory ones when unset
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog: Arc<dyn Catalog> = match &config.database_url {
            Some(url) => {
                let pool = config::init_db_pool(config, url)
                    .await
                    .context("Failed to connect to database")?;

                if config.run_migrations {
                    config::run_migrations(&pool)
                        .await
                        .context("Failed to apply database migrations")?;
                }

                Arc::new(PgCatalog::new(pool))
            }
            None => Arc::new(MemoryCatalog::new()),
        };

        let (storage, memory_storage): (Arc<dyn ObjectStorage>, Option<Arc<MemoryStorage>>) =
            match config.storage_credentials() {
                Some((url, key)) => (Arc::new(SupabaseStorage::new(url, key)), None),
                None => {
                    let memory = Arc::new(MemoryStorage::new(&config.public_base_url));
                    (memory.clone(), Some(memory))
                }
            };

        log::info!(
            "Catalog backend: {}, storage backend: {}",
            catalog.backend(),
            storage.backend()
        );

        Ok(Self::new(
            catalog,
            storage,
            memory_storage,
            config.login_attempts_per_minute,
        ))
    }
}
