//! Application state - shared across all handlers.

use std::sync::Arc;

use blogful_core::error::RepoError;
use blogful_core::ports::ArticleRepository;
use blogful_infra::database::{DatabaseConfig, PostgresArticleRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleRepository>,
}

impl AppState {
    /// Build the application state against the configured database.
    ///
    /// The relational store is the sole owner of the resource, so a
    /// failed connection is fatal rather than degraded.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let db = config.connect().await?;

        tracing::info!("Application state initialized");

        Ok(Self {
            articles: Arc::new(PostgresArticleRepository::new(db)),
        })
    }
}
