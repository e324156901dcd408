use async_trait::async_trait;
use models::jersey::JerseyInput;

use super::Jersey;
use crate::errors::ServiceError;

/// Persistence primitives for jerseys.
///
/// Ids arrive as raw text from the URL; malformed ids must be reported as
/// `NotFound`, never as a distinct error.
#[async_trait]
pub trait JerseyRepository: Send + Sync {
    async fn create(&self, input: &JerseyInput) -> Result<Jersey, ServiceError>;
    async fn get(&self, id: &str) -> Result<Jersey, ServiceError>;
    /// All jerseys, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Jersey>, ServiceError>;
    async fn update(&self, id: &str, input: &JerseyInput) -> Result<Jersey, ServiceError>;
    /// Hard delete; returns the removed record.
    async fn delete(&self, id: &str) -> Result<Jersey, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};

    use chrono::Utc;
    use models::jersey::{parse_id, touch};
    use tokio::sync::RwLock;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct InMemoryJerseyRepository {
        rows: RwLock<HashMap<Uuid, Jersey>>,
        unavailable: AtomicBool,
    }

    impl InMemoryJerseyRepository {
        /// Make every following call fail as if the database were down.
        pub fn set_unavailable(&self, down: bool) {
            self.unavailable.store(down, Ordering::SeqCst);
        }

        pub async fn len(&self) -> usize {
            self.rows.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.rows.read().await.is_empty()
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl JerseyRepository for InMemoryJerseyRepository {
        async fn create(&self, input: &JerseyInput) -> Result<Jersey, ServiceError> {
            self.check()?;
            let fields = input.validate()?;
            let now = Utc::now().into();
            let jersey = Jersey {
                id: Uuid::new_v4(),
                team: fields.team,
                country: fields.country,
                price: fields.price,
                image_url: fields.image_url,
                created_at: now,
                updated_at: now,
            };
            self.rows.write().await.insert(jersey.id, jersey.clone());
            Ok(jersey)
        }

        async fn get(&self, id: &str) -> Result<Jersey, ServiceError> {
            self.check()?;
            let id = parse_id(id)?;
            self.rows.read().await.get(&id).cloned().ok_or_else(|| ServiceError::not_found("jersey"))
        }

        async fn list(&self) -> Result<Vec<Jersey>, ServiceError> {
            self.check()?;
            let mut all: Vec<Jersey> = self.rows.read().await.values().cloned().collect();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(all)
        }

        async fn update(&self, id: &str, input: &JerseyInput) -> Result<Jersey, ServiceError> {
            self.check()?;
            let id = parse_id(id)?;
            let mut rows = self.rows.write().await;
            let existing = rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("jersey"))?;
            let fields = input.validate()?;
            existing.team = fields.team;
            existing.country = fields.country;
            existing.price = fields.price;
            existing.image_url = fields.image_url;
            existing.updated_at = touch(existing.updated_at);
            Ok(existing.clone())
        }

        async fn delete(&self, id: &str) -> Result<Jersey, ServiceError> {
            self.check()?;
            let id = parse_id(id)?;
            self.rows.write().await.remove(&id).ok_or_else(|| ServiceError::not_found("jersey"))
        }
    }
}
