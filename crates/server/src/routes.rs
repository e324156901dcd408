use std::{any::Any, time::Duration};

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use common::types::Health;
use tower::Layer;
use tower_http::{
    catch_panic::CatchPanicLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use crate::errors::PageError;
use crate::method_override::method_override;
use crate::state::AppState;

pub mod jerseys;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn not_found() -> PageError {
    PageError::NotFound
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(%detail, "handler panicked");
    PageError::Unavailable.into_response()
}

/// Catalog routes only, without the method-override wrapper or tracing.
pub fn catalog_routes(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // A known path with an unsupported method gets the 404 page, not a bare 405
        .route("/", get(jerseys::list).fallback(not_found))
        .route("/jersey/:id", get(jerseys::detail).fallback(not_found))
        .route("/admin", get(jerseys::admin_form).post(jerseys::create).fallback(not_found))
        .route(
            "/admin/:id",
            put(jerseys::update)
                .patch(jerseys::update)
                .delete(jerseys::delete)
                .fallback(not_found),
        )
        .route("/health", get(health).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Build the full application router
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let routes = catalog_routes(state, request_timeout);

    // Method override must see the request before the inner router matches it
    let overridden = middleware::from_fn(method_override).layer(routes);

    Router::new().fallback_service(overridden).layer(
        TraceLayer::new_for_http()
            // One INFO span per request with method and path
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(
                DefaultOnRequest::new()
                    .level(Level::INFO),
            )
            // Status code and latency on the way out
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            // 5xx are logged at ERROR
            .on_failure(
                DefaultOnFailure::new()
                    .level(Level::ERROR),
            ),
    )
}
