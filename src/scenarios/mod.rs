pub mod case_sampler;

pub use case_sampler::{GeneratedCase, sample_case};
