use std::time::Duration;

use models::errors::{FieldErrors, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("store did not answer within {0:?}")]
    Timeout(Duration),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(errors) => ServiceError::Validation(errors),
            ModelError::NotFound(what) => ServiceError::NotFound(what),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
