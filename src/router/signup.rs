use axum::body::Bytes;
use axum::extract::State;

use crate::AppState;
use crate::model::{HttpRequest, HttpResponse, SignUpBody};

/// Handler to register an account.
///
/// A body that is not a JSON object is read as an empty form. Fields of
/// the wrong type are read as absent one by one.
pub async fn handler(
    State(state): State<AppState>,
    body: Bytes,
) -> HttpResponse {
    let body = serde_json::from_slice::<SignUpBody>(&body).unwrap_or_else(
        |err| {
            tracing::debug!(error = %err, "unreadable sign up body");
            SignUpBody::default()
        },
    );

    state.controller.handle(HttpRequest::new(body)).await
}
