//! RFC 7807 Problem Details documents (pure data model, no HTTP framework
//! dependencies)

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Fault, kind_def};
use crate::model::ModelState;

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 7807.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Build the relative problem-type reference for a kind slug.
#[must_use]
pub fn error_type_uri(slug: &str) -> String {
    format!("/Docs/Errors/{slug}")
}

/// RFC 7807 problem document.
///
/// The wire form is exactly `type`, `title`, and `detail`; `type` and `title`
/// are fixed per error kind, `detail` is specific to the occurrence. The
/// response status travels alongside but is not serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(
        title = "ProblemDocument",
        description = "RFC 7807 Problem Details for HTTP APIs"
    )
)]
#[must_use]
pub struct ProblemDocument {
    /// A relative URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type. Stable across
    /// occurrences of the same kind.
    pub title: String,
    /// A human-readable explanation specific to this occurrence.
    pub detail: String,
    /// The HTTP status to respond with. Not part of the wire form.
    #[serde(skip)]
    pub status: StatusCode,
}

impl ProblemDocument {
    pub(crate) fn for_slug(
        slug: impl AsRef<str>,
        title: impl Into<String>,
        status: StatusCode,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            type_url: error_type_uri(slug.as_ref()),
            title: title.into(),
            detail: detail.into(),
            status,
        }
    }

    /// Document for a fault raised by handler logic. The fault's declared
    /// kind picks `type` and `title`; its message becomes `detail` verbatim.
    /// Responds 500.
    pub fn from_fault(fault: &dyn Fault) -> Self {
        kind_def(fault.kind()).as_problem(StatusCode::INTERNAL_SERVER_ERROR, fault.to_string())
    }

    /// Document for a request path no route matched. Responds 404.
    pub fn invalid_path(path: &str) -> Self {
        catalog::INVALID_PATH.as_problem(
            StatusCode::NOT_FOUND,
            format!("The path '{path}' is not valid. Please check the endpoint and try again."),
        )
    }

    /// Document for a domain resource that does not exist, e.g.
    /// `not_found("Widget", ...)` yields `/Docs/Errors/WidgetNotFound`.
    /// Responds 404.
    pub fn not_found(resource: &str, detail: impl Into<String>) -> Self {
        Self::for_slug(
            format!("{resource}NotFound"),
            format!("{resource} not found."),
            StatusCode::NOT_FOUND,
            detail,
        )
    }

    /// Document for a request model that failed validation; `detail` is the
    /// state's rendered field errors. Responds 400.
    pub fn invalid_model(state: &ModelState) -> Self {
        catalog::INVALID_MODEL.as_problem(StatusCode::BAD_REQUEST, state.to_string())
    }

    /// Document for an unclassified failure (panic, opaque error). Responds
    /// 500 with the documented `UnhandledError` identifier.
    pub fn unhandled(detail: impl Into<String>) -> Self {
        catalog::UNCLASSIFIED.as_problem(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

/// Axum integration: make a problem document directly usable as a response.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ProblemDocument {
    fn into_response(self) -> axum::response::Response {
        use axum::http::HeaderValue;

        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::catalog::FaultKind;

    #[derive(Debug, thiserror::Error)]
    enum TestFault {
        #[error("{0}")]
        BadInput(String),
        #[error("upstream timed out after {0}ms")]
        Timeout(u64),
        #[error("boom")]
        Boom,
    }

    impl Fault for TestFault {
        fn kind(&self) -> FaultKind {
            match self {
                Self::BadInput(_) => FaultKind::InvalidArgument,
                Self::Timeout(_) => FaultKind::Named("UpstreamTimeout"),
                Self::Boom => FaultKind::Unclassified,
            }
        }
    }

    #[test]
    fn invalid_argument_fault_has_fixed_type_and_title() {
        for message in ["first", "a completely different message"] {
            let p = ProblemDocument::from_fault(&TestFault::BadInput(message.to_owned()));
            assert_eq!(p.type_url, "/Docs/Errors/InvalidArgument");
            assert_eq!(p.title, "Invalid argument.");
            assert_eq!(p.detail, message);
            assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn named_fault_reflects_identifier_into_type_and_title() {
        let p = ProblemDocument::from_fault(&TestFault::Timeout(250));
        assert_eq!(p.type_url, "/Docs/Errors/UpstreamTimeout");
        assert_eq!(p.title, "UpstreamTimeout");
        assert_eq!(p.detail, "upstream timed out after 250ms");
    }

    #[test]
    fn unclassified_fault_uses_documented_default() {
        let p = ProblemDocument::from_fault(&TestFault::Boom);
        assert_eq!(p.type_url, "/Docs/Errors/UnhandledError");
        assert_eq!(p.title, "Unhandled error.");
        assert_eq!(p.detail, "boom");
    }

    #[test]
    fn invalid_path_embeds_path_verbatim() {
        for path in ["/nope", "", "/a b/%2F?x=1", "/嗨"] {
            let p = ProblemDocument::invalid_path(path);
            assert_eq!(p.type_url, "/Docs/Errors/InvalidPath");
            assert_eq!(p.title, "Invalid URI path.");
            assert_eq!(
                p.detail,
                format!("The path '{path}' is not valid. Please check the endpoint and try again.")
            );
            assert_eq!(p.status, StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn not_found_composes_resource_into_type_and_title() {
        let p = ProblemDocument::not_found("Widget", "no widget with id 5");
        assert_eq!(p.type_url, "/Docs/Errors/WidgetNotFound");
        assert_eq!(p.title, "Widget not found.");
        assert_eq!(p.detail, "no widget with id 5");
        assert_eq!(p.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_model_renders_state_as_detail() {
        let mut state = ModelState::new();
        state.add_error("email", "must not be empty");
        state.add_error("age", "must be positive");

        let p = ProblemDocument::invalid_model(&state);
        assert_eq!(p.type_url, "/Docs/Errors/InvalidModel");
        assert_eq!(p.title, "Invalid model.");
        assert_eq!(p.detail, "age: must be positive; email: must not be empty");
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn builders_are_pure() {
        let fault = TestFault::Timeout(9);
        assert_eq!(
            ProblemDocument::from_fault(&fault),
            ProblemDocument::from_fault(&fault)
        );
        assert_eq!(
            ProblemDocument::invalid_path("/x"),
            ProblemDocument::invalid_path("/x")
        );
        assert_eq!(
            ProblemDocument::not_found("Order", "gone"),
            ProblemDocument::not_found("Order", "gone")
        );
    }

    #[test]
    fn wire_form_has_exactly_three_fields() {
        let p = ProblemDocument::invalid_path("/missing");
        let value = serde_json::to_value(&p).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert!(object.contains_key("type"));
        assert!(object.contains_key("title"));
        assert!(object.contains_key("detail"));
    }

    #[test]
    fn wire_form_round_trips() {
        let json = r#"{"type":"/Docs/Errors/InvalidModel","title":"Invalid model.","detail":"age: must be positive"}"#;
        let p: ProblemDocument = serde_json::from_str(json).unwrap();
        assert_eq!(p.type_url, "/Docs/Errors/InvalidModel");
        assert_eq!(p.title, "Invalid model.");
        assert_eq!(p.detail, "age: must be positive");
    }
}
