pub mod errors;
#[macro_use]
pub mod logging;
pub mod setup;

pub use errors::{DiagnosisError, Result};
