use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::views;

/// Failure pages shown instead of the requested one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    #[error("page not found")]
    NotFound,
    #[error("admin action not permitted")]
    Forbidden,
    #[error("catalog temporarily unavailable")]
    Unavailable,
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::Forbidden => StatusCode::FORBIDDEN,
            PageError::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let body = match self {
            PageError::NotFound => views::not_found(),
            PageError::Forbidden => views::forbidden(),
            PageError::Unavailable => views::server_error(),
        };
        (self.status(), Html(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("cannot listen on {addr}: {reason}")]
    Bind { addr: String, reason: String },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
