pub mod engine;
pub mod evidence;
pub mod explain;
pub mod session;
pub mod table;

pub use engine::{InferenceEngine, PosteriorQuery, SymptomProbability};
pub use evidence::Evidence;
pub use explain::{Explanation, EvidenceRole};
pub use session::DiagnosisSession;
pub use table::{DiseasePosterior, PosteriorTable};
