//! Signup is a registration endpoint with pluggable email validation and
//! account creation.

#![forbid(unsafe_code)]

pub mod adapters;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod ports;
mod router;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use controller::{Controller, SignUpController};

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: axum::http::Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use axum::http::header;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub controller: Arc<dyn Controller>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    Router::new()
        // `POST /signup` goes to `signup`.
        .route("/signup", post(router::signup::handler))
        .with_state(state)
}

/// Initialize the application state with the default adapters.
pub fn initialize_state(config: Arc<config::Configuration>) -> AppState {
    let controller = SignUpController::new(
        Box::new(adapters::ValidatorEmailValidator::new()),
        Box::new(adapters::InMemoryAccounts::new(config.accounts.id_length)),
    );

    AppState {
        config,
        controller: Arc::new(controller),
    }
}
