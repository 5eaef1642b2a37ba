//! Application state - shared across all handlers.

use std::sync::Arc;

use feed_core::PostService;
use feed_core::ports::PostRepository;
use feed_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    /// Name of the backing store, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    pub fn new(repo: Arc<dyn PostRepository>, storage: &'static str) -> Self {
        Self {
            posts: Arc::new(PostService::with_system_clock(repo)),
            storage,
        }
    }

    /// State backed by the in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()), "memory")
    }

    /// Build the application state with the store selected by configuration.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        let state = match &config.database {
            Some(db_config) => {
                use anyhow::Context;
                use migration::{Migrator, MigratorTrait};

                let db = feed_infra::database::connect(db_config)
                    .await
                    .context("failed to connect to database")?;

                if config.auto_migrate {
                    Migrator::up(&db, None)
                        .await
                        .context("failed to apply migrations")?;
                    tracing::info!("Database migrations applied");
                }

                Self::new(Arc::new(feed_infra::SeaOrmPostRepository::new(db)), "postgres")
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage, "Application state initialized");
        Ok(state)
    }
}
