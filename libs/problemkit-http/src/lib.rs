//! Axum pipeline hooks emitting RFC 7807 problem responses
//!
//! Three collaborating pieces wire a uniform `application/problem+json`
//! error surface into an Axum service:
//! - [`guard::model_validation_guard`] keeps invalid request models away
//!   from handlers,
//! - [`interceptor::error_interceptor`] gives unmatched routes and
//!   panicking handlers a problem body,
//! - [`boundary::CaughtFault`] converts typed handler faults exactly once.
//!
//! [`pipeline::ErrorPipeline`] composes them in a fixed order at startup.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod boundary;
pub mod guard;
pub mod interceptor;
pub mod pipeline;

pub use boundary::{CaughtFault, FaultResult};
pub use guard::{ModelBinder, model_validation_guard};
pub use interceptor::error_interceptor;
pub use pipeline::ErrorPipeline;

// Re-export the data model so hosts depend on one crate.
pub use problemkit_errors::{
    APPLICATION_PROBLEM_JSON, Fault, FaultKind, ModelState, ProblemDocument,
};
