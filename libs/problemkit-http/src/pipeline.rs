//! Ordered composition of the error surface
//!
//! The hooks are plain tower layers; this module fixes their order at
//! startup so "who writes the body" is unambiguous: the guard decides before
//! handlers run, the interceptor decides after everything else finished.

use std::sync::Arc;

use axum::{Router, middleware::from_fn};

use crate::guard::{ModelBinder, model_validation_guard};
use crate::interceptor::error_interceptor;

/// Startup-time composition of the problem-response hooks.
#[derive(Clone, Default)]
pub struct ErrorPipeline {
    binder: Option<Arc<dyn ModelBinder>>,
}

impl ErrorPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the host's model binder; without one, no validation guard is
    /// installed.
    #[must_use]
    pub fn with_model_binder(mut self, binder: Arc<dyn ModelBinder>) -> Self {
        self.binder = Some(binder);
        self
    }

    /// Layer the hooks onto a router. Layers registered later run earlier,
    /// so the stack reads bottom-up:
    pub fn apply(&self, mut router: Router) -> Router {
        // 2) Model validation guard - immediately before handlers, and only
        //    when a route matched (unmatched paths belong to the interceptor)
        if let Some(binder) = &self.binder {
            let binder = binder.clone();
            router = router.route_layer(from_fn(move |req, next| {
                model_validation_guard(binder.clone(), req, next)
            }));
        }

        // 1) Error interceptor - outermost; sees the final status and
        //    recovers panics from everything beneath it
        router.layer(from_fn(error_interceptor))
    }
}
