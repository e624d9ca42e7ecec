#[macro_use]
pub mod common;
pub mod inference;
pub mod model;
pub mod network;
pub mod scenarios;

pub use common::errors::{DiagnosisError, Result};
pub use inference::{DiagnosisSession, Evidence, Explanation, InferenceEngine, PosteriorTable};
pub use network::{Network, NetworkSpec};
pub use scenarios::{GeneratedCase, sample_case};
