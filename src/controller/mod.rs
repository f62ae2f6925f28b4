//! Controllers turning HTTP requests into responses.

use async_trait::async_trait;

use crate::model::{HttpRequest, HttpResponse};

pub mod signup;

pub use signup::SignUpController;

/// Inbound port of the HTTP layer.
#[async_trait]
pub trait Controller: Send + Sync {
    /// Handle a request. Never fails: every failure becomes a response.
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
