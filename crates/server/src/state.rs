use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use service::catalog::{repo::seaorm::SeaOrmJerseyRepository, CatalogService};

/// Shared by every handler; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog: Arc::new(catalog) }
    }

    /// Catalog backed by `db`, each store call bounded by `store_timeout`.
    pub fn with_database(db: DatabaseConnection, store_timeout: Duration) -> Self {
        let repo = Arc::new(SeaOrmJerseyRepository::new(db));
        Self::new(CatalogService::new(repo).with_store_timeout(store_timeout))
    }
}
