pub mod graph;
pub mod models;
pub mod pulmonary;

pub use graph::{MAX_ENUMERABLE_DISEASES, Network};
pub use models::{Cause, CauseSpec, Disease, DiseaseSpec, NetworkSpec, Symptom, SymptomSpec};
