//! Error types for network construction and inference queries.

use thiserror::Error;

/// Errors raised while building a network or answering a query.
///
/// Structural errors are fatal at construction time; the not-found variants
/// are returned from queries and leave engine state untouched. An evidence
/// combination that is impossible under the model is *not* an error: the
/// posterior comes back as `0.0` (see [`crate::inference::PosteriorQuery`]).
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiagnosisError {
    /// The network description violates a structural invariant, such as a
    /// cause naming an unknown disease or a probability outside `[0, 1]`.
    #[error("structural error: {0}")]
    Structural(String),

    /// More diseases than exact enumeration is allowed to visit.
    #[error("network has {count} diseases, exact enumeration supports at most {max}")]
    TooManyDiseases { count: usize, max: usize },

    #[error("unknown disease: {0}")]
    UnknownDisease(String),

    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),
}

impl DiagnosisError {
    /// True for the query-time lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DiagnosisError::UnknownDisease(_) | DiagnosisError::UnknownSymptom(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DiagnosisError>;
