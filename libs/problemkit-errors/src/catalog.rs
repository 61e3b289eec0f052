//! Fault taxonomy: explicit error kinds and their wire identifiers
//!
//! Error types never leak their Rust type names into responses. They either
//! declare a stable public identifier through [`FaultKind::Named`] or fall
//! back to the documented unclassified default.

use crate::problem::ProblemDocument;
use http::StatusCode;

/// Classification of a fault raised by handler logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// A caller-supplied value failed a precondition.
    InvalidArgument,
    /// The error type declares a stable public identifier. The identifier
    /// flows verbatim into the problem `type` URI and `title`.
    Named(&'static str),
    /// Default for error types that declare nothing; maps to the generic
    /// `UnhandledError` identifier.
    Unclassified,
}

/// Static kind definition resolved from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
    pub slug: &'static str,
    pub title: &'static str,
}

pub const INVALID_ARGUMENT: KindDef = KindDef {
    slug: "InvalidArgument",
    title: "Invalid argument.",
};

pub const INVALID_PATH: KindDef = KindDef {
    slug: "InvalidPath",
    title: "Invalid URI path.",
};

pub const INVALID_MODEL: KindDef = KindDef {
    slug: "InvalidModel",
    title: "Invalid model.",
};

pub const UNCLASSIFIED: KindDef = KindDef {
    slug: "UnhandledError",
    title: "Unhandled error.",
};

impl KindDef {
    /// Convert this definition into a problem document with the given
    /// response status and occurrence-specific detail.
    #[inline]
    pub fn as_problem(&self, status: StatusCode, detail: impl Into<String>) -> ProblemDocument {
        ProblemDocument::for_slug(self.slug, self.title, status, detail)
    }
}

/// Resolve a [`FaultKind`] to its wire identifiers.
#[must_use]
pub fn kind_def(kind: FaultKind) -> KindDef {
    match kind {
        FaultKind::InvalidArgument => INVALID_ARGUMENT,
        FaultKind::Named(name) => KindDef {
            slug: name,
            title: name,
        },
        FaultKind::Unclassified => UNCLASSIFIED,
    }
}

/// An error that can be classified into the fault taxonomy.
///
/// Application error enums implement this next to their `std::error::Error`
/// derive; the message (`Display` output) becomes the problem `detail`.
pub trait Fault: std::error::Error + Send + Sync + 'static {
    /// Kind used to pick the wire identifier.
    fn kind(&self) -> FaultKind {
        FaultKind::Unclassified
    }
}
