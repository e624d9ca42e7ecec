//! Deterministic rationale for a disease's posterior.
//!
//! Each observed symptom is classified against the queried disease using
//! fixed cause-probability thresholds. They are hand-tuned values, kept as
//! named constants until there is data to calibrate them against.

use crate::common::errors::Result;
use crate::inference::engine::InferenceEngine;
use crate::inference::evidence::Evidence;
use log::trace;
use serde::Serialize;

/// A present symptom supports the disease when it causes it with more than this probability.
pub const SUPPORTING_CAUSE_THRESHOLD: f64 = 0.5;
/// A present symptom opposes the disease when it is caused with less than this probability.
pub const WEAK_CAUSE_THRESHOLD: f64 = 0.3;
/// An absent symptom opposes the disease when it is caused with more than this probability.
pub const EXPECTED_CAUSE_THRESHOLD: f64 = 0.7;

pub const NO_EVIDENCE_NARRATIVE: &str = "No evidence observed - showing prior probability";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub disease: String,
    pub prior: f64,
    pub posterior: f64,
    pub supporting: Vec<String>,
    pub opposing: Vec<String>,
    pub narrative: String,
}

/// How one observation bears on a disease
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceRole {
    Supporting,
    /// Present, but the disease rarely or never causes it
    OpposingUnexpected,
    /// Absent, although the disease usually causes it
    OpposingMissing,
}

/// Classifies an observation given the disease's cause probability for the
/// symptom (`None` when the disease is not a cause).
pub fn classify(observed: bool, cause_probability: Option<f64>) -> Option<EvidenceRole> {
    match (observed, cause_probability) {
        (true, Some(p)) if p > SUPPORTING_CAUSE_THRESHOLD => Some(EvidenceRole::Supporting),
        (true, None) => Some(EvidenceRole::OpposingUnexpected),
        (true, Some(p)) if p < WEAK_CAUSE_THRESHOLD => Some(EvidenceRole::OpposingUnexpected),
        (false, Some(p)) if p > EXPECTED_CAUSE_THRESHOLD => Some(EvidenceRole::OpposingMissing),
        _ => None,
    }
}

fn narrative(prior: f64, posterior: f64, supporting: &[String], opposing: &[String]) -> String {
    let mut text = format!(
        "Prior: {:.1}% → Posterior: {:.1}%",
        prior * 100.0,
        posterior * 100.0
    );
    if !supporting.is_empty() {
        text.push_str(&format!("\nSupporting evidence: {}", supporting.join(", ")));
    }
    if !opposing.is_empty() {
        text.push_str(&format!("\nOpposing evidence: {}", opposing.join(", ")));
    }
    text
}

impl InferenceEngine {
    /// Explains the posterior of `disease` under `evidence`.
    ///
    /// Without evidence the prior is reported and no enumeration runs.
    pub fn explain(&self, disease: &str, evidence: &Evidence) -> Result<Explanation> {
        let network = self.network();
        let disease_id = network.disease_id(disease)?;
        let prior = network.diseases()[disease_id].prior;
        let observations = self.resolve(evidence)?;

        if observations.is_empty() {
            return Ok(Explanation {
                disease: disease.to_string(),
                prior,
                posterior: prior,
                supporting: Vec::new(),
                opposing: Vec::new(),
                narrative: NO_EVIDENCE_NARRATIVE.to_string(),
            });
        }

        let posterior = self.posterior(disease, evidence)?;
        let mut supporting = Vec::new();
        let mut opposing = Vec::new();
        for (symptom_id, observed) in observations {
            let symptom = &network.symptoms()[symptom_id];
            let cause_probability = symptom.cause_probability(disease_id);
            let role = classify(observed, cause_probability);
            trace!("{} observed={} -> {:?}", symptom.name, observed, role);
            match role {
                Some(EvidenceRole::Supporting) => supporting.push(format!(
                    "{} (P={:.2})",
                    symptom.name,
                    cause_probability.unwrap_or_default()
                )),
                Some(EvidenceRole::OpposingUnexpected) => {
                    opposing.push(format!("{} (disease rarely causes it)", symptom.name))
                }
                Some(EvidenceRole::OpposingMissing) => {
                    opposing.push(format!("No {} (disease usually causes it)", symptom.name))
                }
                None => {}
            }
        }

        Ok(Explanation {
            disease: disease.to_string(),
            prior,
            posterior,
            narrative: narrative(prior, posterior, &supporting, &opposing),
            supporting,
            opposing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{DiseaseSpec, Network, NetworkSpec, SymptomSpec};

    #[test]
    fn test_threshold_constants() {
        assert_eq!(SUPPORTING_CAUSE_THRESHOLD, 0.5);
        assert_eq!(WEAK_CAUSE_THRESHOLD, 0.3);
        assert_eq!(EXPECTED_CAUSE_THRESHOLD, 0.7);
    }

    #[test]
    fn test_classify_present_symptoms() {
        assert_eq!(classify(true, Some(0.51)), Some(EvidenceRole::Supporting));
        assert_eq!(classify(true, Some(0.5)), None);
        assert_eq!(classify(true, Some(0.3)), None);
        assert_eq!(classify(true, Some(0.29)), Some(EvidenceRole::OpposingUnexpected));
        assert_eq!(classify(true, None), Some(EvidenceRole::OpposingUnexpected));
    }

    #[test]
    fn test_classify_absent_symptoms() {
        assert_eq!(classify(false, Some(0.71)), Some(EvidenceRole::OpposingMissing));
        assert_eq!(classify(false, Some(0.7)), None);
        assert_eq!(classify(false, Some(0.1)), None);
        assert_eq!(classify(false, None), None);
    }

    fn engine() -> InferenceEngine {
        let spec = NetworkSpec::new(
            vec![
                DiseaseSpec::new("Pneumonia", 0.15),
                DiseaseSpec::new("Infection", 0.12),
                DiseaseSpec::new("Asbestosis", 0.05),
            ],
            vec![
                SymptomSpec::new("Fever", 0.01, &[("Pneumonia", 0.90), ("Infection", 0.95)]),
                SymptomSpec::new("Calcified_Plaques", 0.001, &[("Asbestosis", 0.95)]),
                SymptomSpec::new("Chest_Pain", 0.02, &[("Pneumonia", 0.40), ("Asbestosis", 0.10)]),
            ],
        );
        InferenceEngine::new(Network::from_spec(&spec).unwrap())
    }

    #[test]
    fn test_explain_without_evidence() {
        let explanation = engine().explain("Asbestosis", &Evidence::new()).unwrap();
        assert_eq!(explanation.prior, 0.05);
        assert_eq!(explanation.posterior, 0.05);
        assert!(explanation.supporting.is_empty());
        assert!(explanation.opposing.is_empty());
        assert_eq!(explanation.narrative, NO_EVIDENCE_NARRATIVE);
    }

    #[test]
    fn test_explain_fever_and_plaques_for_asbestosis() {
        let evidence: Evidence = [("Fever", true), ("Calcified_Plaques", true)]
            .into_iter()
            .collect();
        let explanation = engine().explain("Asbestosis", &evidence).unwrap();

        assert_eq!(explanation.supporting, vec!["Calcified_Plaques (P=0.95)"]);
        assert_eq!(explanation.opposing, vec!["Fever (disease rarely causes it)"]);
        assert!(explanation.posterior > explanation.prior);
        assert!(explanation.narrative.starts_with("Prior: 5.0% → Posterior: "));
        assert!(
            explanation
                .narrative
                .ends_with("\nOpposing evidence: Fever (disease rarely causes it)")
        );
    }

    #[test]
    fn test_explain_missing_expected_symptom() {
        let evidence: Evidence = [("Fever", false), ("Chest_Pain", true)].into_iter().collect();
        let explanation = engine().explain("Pneumonia", &evidence).unwrap();

        assert!(explanation.supporting.is_empty());
        assert_eq!(explanation.opposing, vec!["No Fever (disease usually causes it)"]);
        // chest pain is unclassified at P=0.40 but still moves the posterior
        assert!((explanation.posterior - 0.2272).abs() < 1e-3);
    }

    #[test]
    fn test_explain_unknown_disease() {
        assert!(engine().explain("Gout", &Evidence::new()).unwrap_err().is_not_found());
    }
}
