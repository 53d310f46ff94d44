use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn};

use blogful_core::error::RepoError;

/// Configuration for the article database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Open a connection pool against the configured database.
    pub async fn connect(&self) -> Result<DbConn, RepoError> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(self.url.as_str())
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!("Database connected (pool: {})", self.max_connections);

        Ok(conn)
    }
}
