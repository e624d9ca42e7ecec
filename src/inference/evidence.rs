use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Observed symptom values for one case: `true` present, `false` absent.
///
/// Symptoms without an entry are unobserved. Keys are checked against the
/// network when a query runs; an unknown key fails the query with
/// [`crate::DiagnosisError::UnknownSymptom`] rather than being skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evidence {
    observations: HashMap<String, bool>,
}

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evidence consisting of a single observation
    pub fn single(symptom: &str, observed: bool) -> Self {
        let mut evidence = Self::new();
        evidence.observe(symptom, observed);
        evidence
    }

    /// Replaces every observation with `observations`
    pub fn set(&mut self, observations: HashMap<String, bool>) {
        self.observations = observations;
    }

    /// Records one observation, overwriting any earlier value for the symptom
    pub fn observe(&mut self, symptom: &str, observed: bool) -> Option<bool> {
        self.observations.insert(symptom.to_string(), observed)
    }

    pub fn retract(&mut self, symptom: &str) -> Option<bool> {
        self.observations.remove(symptom)
    }

    pub fn clear(&mut self) {
        self.observations.clear();
    }

    pub fn get(&self, symptom: &str) -> Option<bool> {
        self.observations.get(symptom).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.observations
            .iter()
            .map(|(symptom, observed)| (symptom.as_str(), *observed))
    }

    pub fn observations(&self) -> &HashMap<String, bool> {
        &self.observations
    }
}

impl From<HashMap<String, bool>> for Evidence {
    fn from(observations: HashMap<String, bool>) -> Self {
        Self { observations }
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Evidence {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            observations: iter
                .into_iter()
                .map(|(symptom, observed)| (symptom.into(), observed))
                .collect(),
        }
    }
}
