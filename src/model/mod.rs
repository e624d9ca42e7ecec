pub mod noisy_or;
pub mod state;

pub use noisy_or::{observation_likelihood, presence_probability};
pub use state::DiseaseState;
