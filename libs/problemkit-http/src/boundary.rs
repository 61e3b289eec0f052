//! Fault boundary
//!
//! Handlers propagate failures with `?` into a [`CaughtFault`]; its
//! `IntoResponse` impl is the single point where a fault becomes an HTTP
//! response. The raw error is logged here and never observed above the
//! pipeline.

use axum::response::{IntoResponse, Response};
use problemkit_errors::{Fault, ProblemDocument};

/// A fault captured on its way out of handler logic.
///
/// Built from any [`Fault`] via [`CaughtFault::new`], or from an opaque
/// `anyhow::Error` via `?`. Converted to a 500 problem response exactly once,
/// at the pipeline boundary.
pub struct CaughtFault(Inner);

enum Inner {
    Classified(Box<dyn Fault>),
    Opaque(anyhow::Error),
}

impl CaughtFault {
    pub fn new(fault: impl Fault) -> Self {
        Self(Inner::Classified(Box::new(fault)))
    }
}

impl From<anyhow::Error> for CaughtFault {
    fn from(err: anyhow::Error) -> Self {
        Self(Inner::Opaque(err))
    }
}

impl IntoResponse for CaughtFault {
    fn into_response(self) -> Response {
        let problem = match &self.0 {
            Inner::Classified(fault) => {
                tracing::error!(error = %fault, "handler fault reached the pipeline boundary");
                ProblemDocument::from_fault(fault.as_ref())
            }
            Inner::Opaque(err) => {
                tracing::error!(error = %err, "opaque error reached the pipeline boundary");
                ProblemDocument::unhandled(err.to_string())
            }
        };
        problem.into_response()
    }
}

/// Result alias for handlers terminating at the fault boundary.
pub type FaultResult<T> = Result<T, CaughtFault>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use http::StatusCode;
    use problemkit_errors::FaultKind;

    #[derive(Debug, thiserror::Error)]
    #[error("negative quantity")]
    struct NegativeQuantity;

    impl Fault for NegativeQuantity {
        fn kind(&self) -> FaultKind {
            FaultKind::InvalidArgument
        }
    }

    #[test]
    fn classified_fault_becomes_500_problem() {
        let response = CaughtFault::new(NegativeQuantity).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[http::header::CONTENT_TYPE],
            "application/problem+json"
        );
    }

    #[test]
    fn opaque_error_becomes_unhandled_problem() {
        let fault: CaughtFault = anyhow::anyhow!("db connection lost").into();
        let response = fault.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
