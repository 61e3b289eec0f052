//! Error interceptor
//!
//! Outermost pipeline hook. After the inner stack completes it rewrites a
//! bodyless 404 into an `InvalidPath` problem (status preserved), and a panic
//! escaping the inner stack is recovered here into a 500 `UnhandledError`
//! problem. Responses that already carry a body pass through untouched.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;
use http::StatusCode;
use http_body::Body as _;
use problemkit_errors::ProblemDocument;

/// Middleware guaranteeing that unmatched routes and panicking handlers
/// produce a problem document instead of an empty body or a torn connection.
pub async fn error_interceptor(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => {
            if response.status() == StatusCode::NOT_FOUND && !response_has_body(&response) {
                tracing::debug!(%path, "rewriting bare 404 into problem document");
                return ProblemDocument::invalid_path(&path).into_response();
            }
            response
        }
        Err(panic) => {
            let detail = panic_message(panic.as_ref());
            tracing::error!(%path, %detail, "handler panicked, converting at pipeline boundary");
            ProblemDocument::unhandled(detail).into_response()
        }
    }
}

/// A body of unknown size counts as written and is left alone.
fn response_has_body(response: &Response) -> bool {
    response.body().size_hint().exact() != Some(0)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_owned()
    }
}
