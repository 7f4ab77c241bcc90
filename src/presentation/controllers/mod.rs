//! Request controllers.

pub mod signup;

pub use signup::*;

use async_trait::async_trait;

use crate::presentation::http::{HttpRequest, HttpResponse};

/// Turns a request into a response. Never fails: every error becomes a
/// response.
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
