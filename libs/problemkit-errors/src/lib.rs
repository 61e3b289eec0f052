//! Uniform problem documents for web API error surfaces
//!
//! This crate provides the pure data types behind an RFC 7807
//! `application/problem+json` error surface, with no dependencies on HTTP
//! frameworks. It includes:
//! - problem documents and their builders (`ProblemDocument`)
//! - an explicit fault taxonomy (`FaultKind`, `Fault`, the kind catalog)
//! - the model-validation outcome fed in by a host binder (`ModelState`)
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod model;
pub mod problem;

// Re-export commonly used types
pub use catalog::{Fault, FaultKind, KindDef, kind_def};
pub use model::ModelState;
pub use problem::{APPLICATION_PROBLEM_JSON, ProblemDocument, error_type_uri};
