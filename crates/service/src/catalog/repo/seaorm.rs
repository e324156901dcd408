use async_trait::async_trait;
use models::jersey::{self, JerseyInput};
use sea_orm::DatabaseConnection;

use crate::catalog::repository::JerseyRepository;
use crate::catalog::Jersey;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmJerseyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmJerseyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JerseyRepository for SeaOrmJerseyRepository {
    async fn create(&self, input: &JerseyInput) -> Result<Jersey, ServiceError> {
        Ok(jersey::create(&self.db, input).await?)
    }

    async fn get(&self, id: &str) -> Result<Jersey, ServiceError> {
        Ok(jersey::find_by_id(&self.db, id).await?)
    }

    async fn list(&self) -> Result<Vec<Jersey>, ServiceError> {
        Ok(jersey::list_newest_first(&self.db).await?)
    }

    async fn update(&self, id: &str, input: &JerseyInput) -> Result<Jersey, ServiceError> {
        Ok(jersey::update(&self.db, id, input).await?)
    }

    async fn delete(&self, id: &str) -> Result<Jersey, ServiceError> {
        Ok(jersey::delete(&self.db, id).await?)
    }
}
