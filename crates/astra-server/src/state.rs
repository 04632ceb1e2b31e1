//! Shared application state.

use std::sync::Arc;

use astra_config::DatabaseConfig;
use astra_db::error::DatabaseError;
use astra_db::service::AstraService;

/// Cloned into every handler. The service is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AstraService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: AstraService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Open the configured database and wrap it in state.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let path = config.local_path();
        tracing::info!(path, "opening database");
        let service = AstraService::new_local(path).await?;
        Ok(Self::new(service))
    }
}
