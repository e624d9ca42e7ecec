use crate::common::errors::Result;
use crate::inference::Evidence;
use crate::model::{DiseaseState, presence_probability};
use crate::network::Network;
use log::trace;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

/// A synthetic case: the diseases it was generated from and one drawn value per symptom
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedCase {
    pub true_diseases: Vec<String>,
    pub findings: BTreeMap<String, bool>,
}

impl GeneratedCase {
    /// Symptoms drawn as present
    pub fn present_symptoms(&self) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|(_, present)| **present)
            .map(|(symptom, _)| symptom.as_str())
            .collect()
    }

    /// Every finding as evidence, absent symptoms included
    pub fn to_evidence(&self) -> Evidence {
        self.findings
            .iter()
            .map(|(symptom, present)| (symptom.clone(), *present))
            .collect()
    }
}

/// Draws one Bernoulli trial per symptom, in declaration order, with the
/// Noisy-OR presence probability under `present_diseases` (every other
/// disease absent).
pub fn sample_case<S, R>(network: &Network, present_diseases: &[S], rng: &mut R) -> Result<GeneratedCase>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let state = present_diseases
        .iter()
        .map(|name| network.disease_id(name.as_ref()))
        .collect::<Result<Vec<usize>>>()
        .map(DiseaseState::from_present)?;

    let mut findings = BTreeMap::new();
    for symptom in network.symptoms() {
        let probability = presence_probability(symptom, state);
        let present = rng.r#gen::<f64>() < probability;
        trace!("sampled {} = {} (p={:.3})", symptom.name, present, probability);
        findings.insert(symptom.name.clone(), present);
    }

    Ok(GeneratedCase {
        true_diseases: present_diseases
            .iter()
            .map(|name| name.as_ref().to_string())
            .collect(),
        findings,
    })
}
