//! HTML forms can only send GET and POST. A POST carrying `_method=PUT`,
//! `_method=PATCH` or `_method=DELETE` in its query string is re-dispatched
//! with that method. This has to run before routing.

use axum::{
    extract::{Query, Request},
    http::Method,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Method requested through `_method`, if it is one we accept.
pub fn requested_method(req: &Request) -> Option<Method> {
    if req.method() != Method::POST {
        return None;
    }
    let Query(q) = Query::<OverrideQuery>::try_from_uri(req.uri()).ok()?;
    match q.method?.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

pub async fn method_override(mut req: Request, next: Next) -> Response {
    if let Some(method) = requested_method(&req) {
        debug!(%method, path = %req.uri().path(), "method_override");
        *req.method_mut() = method;
    }
    next.run(req).await
}
