//! Domain errors for annotation lookups.

use thiserror::Error;

/// Errors surfaced by annotation lookups.
///
/// A missing annotation is not an error; it resolves to an empty sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("Cannot resolve annotations for an absent instance subject")]
    AbsentSubject,

    #[error("Annotation kind mismatch for key '{key}': expected {expected}, found {found}")]
    KindMismatch {
        key: String,
        expected: String,
        found: String,
    },
}

pub type AnnotationResult<T> = Result<T, AnnotationError>;
