//! Model validation guard
//!
//! Runs immediately before handlers: the registered [`ModelBinder`] inspects
//! the buffered request and reports a [`ModelState`]; an invalid state
//! short-circuits with a 400 problem response and the handler never runs.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{Body, to_bytes},
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http::request::Parts;
use problemkit_errors::{ModelState, ProblemDocument};

/// Binds and validates the request model.
///
/// Implemented by the host application; the guard only consumes the outcome.
/// Binders must not fail: anything wrong with the request is reported as
/// field errors on the returned state.
#[async_trait]
pub trait ModelBinder: Send + Sync + 'static {
    /// Inspect the request head and buffered body and report the outcome.
    async fn bind(&self, parts: &Parts, body: &Bytes) -> ModelState;
}

/// Middleware enforcing that requests reach handlers only with a valid model.
///
/// Apply per route group via `axum::middleware::from_fn` with the binder
/// captured, or through `ErrorPipeline`.
pub async fn model_validation_guard(
    binder: Arc<dyn ModelBinder>,
    req: Request,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "request body could not be buffered for validation");
            let mut state = ModelState::new();
            state.add_error("body", "request body could not be read");
            return ProblemDocument::invalid_model(&state).into_response();
        }
    };

    let state = binder.bind(&parts, &bytes).await;
    if !state.is_valid() {
        tracing::debug!(path = %parts.uri.path(), "model validation failed, short-circuiting");
        return ProblemDocument::invalid_model(&state).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
