use crate::common::errors::Result;
use crate::inference::engine::{InferenceEngine, PosteriorQuery, SymptomProbability};
use crate::inference::evidence::Evidence;
use crate::inference::explain::Explanation;
use crate::inference::table::PosteriorTable;
use crate::network::Network;
use crate::scenarios::{GeneratedCase, sample_case};
use log::{debug, info};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

/// DiagnosisSession provides a stateful interface over the pure [`InferenceEngine`]
/// for callers that accumulate evidence turn by turn.
///
/// Queries read the stored evidence but never write it, so diagnostic
/// queries such as [`DiagnosisSession::likelihood_ratio`] leave it exactly as
/// it was. One session per case; share the engine, not the session.
#[derive(Debug, Clone)]
pub struct DiagnosisSession {
    engine: InferenceEngine,
    evidence: Evidence,
}

impl DiagnosisSession {
    pub fn new(network: Network) -> Self {
        Self::from_engine(InferenceEngine::new(network))
    }

    pub fn from_shared(network: Arc<Network>) -> Self {
        Self::from_engine(InferenceEngine::from_shared(network))
    }

    pub fn from_engine(engine: InferenceEngine) -> Self {
        info!(
            "Starting diagnosis session over {} diseases",
            engine.network().disease_count()
        );
        Self {
            engine,
            evidence: Evidence::new(),
        }
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    pub fn network(&self) -> &Network {
        self.engine.network()
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    /// Replaces the stored evidence. Unknown symptom names are rejected and
    /// the previous evidence is kept.
    pub fn set_evidence(&mut self, observations: HashMap<String, bool>) -> Result<()> {
        let evidence = Evidence::from(observations);
        self.engine.resolve(&evidence)?;
        debug!("evidence set to {} observations", evidence.len());
        self.evidence = evidence;
        Ok(())
    }

    /// Records one observation on top of the stored evidence
    pub fn observe(&mut self, symptom: &str, observed: bool) -> Result<()> {
        self.network().symptom_id(symptom)?;
        self.evidence.observe(symptom, observed);
        Ok(())
    }

    pub fn clear_evidence(&mut self) {
        self.evidence.clear();
    }

    pub fn query(&self, disease: &str) -> Result<PosteriorQuery> {
        self.engine.query(disease, &self.evidence)
    }

    pub fn posterior(&self, disease: &str) -> Result<f64> {
        self.engine.posterior(disease, &self.evidence)
    }

    pub fn posteriors_all(&self) -> Result<PosteriorTable> {
        self.engine.posteriors_all(&self.evidence)
    }

    pub fn rank_diseases(&self) -> Result<Vec<(String, f64)>> {
        self.engine.rank_diseases(&self.evidence)
    }

    pub fn most_likely_disease(&self) -> Result<Option<(String, f64)>> {
        self.engine.most_likely_disease(&self.evidence)
    }

    /// Marginal with no evidence; the stored evidence plays no part
    pub fn marginal_symptom_probability(&self, symptom: &str) -> Result<f64> {
        self.engine.marginal_symptom_probability(symptom)
    }

    /// Computed against single-symptom evidence; the stored evidence plays no part
    pub fn likelihood_ratio(&self, symptom: &str, disease: &str) -> Result<f64> {
        self.engine.likelihood_ratio(symptom, disease)
    }

    pub fn symptom_probabilities(&self) -> Result<Vec<SymptomProbability>> {
        self.engine.symptom_probabilities(&self.evidence)
    }

    pub fn explain(&self, disease: &str) -> Result<Explanation> {
        self.engine.explain(disease, &self.evidence)
    }

    pub fn sample_case<S, R>(&self, present_diseases: &[S], rng: &mut R) -> Result<GeneratedCase>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        sample_case(self.network(), present_diseases, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkSpec;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> DiagnosisSession {
        DiagnosisSession::new(Network::from_spec(&NetworkSpec::pulmonary()).unwrap())
    }

    #[test]
    fn test_evidence_lifecycle() {
        let mut session = session();
        assert!(session.evidence().is_empty());
        assert_eq!(session.posterior("Pneumonia").unwrap(), 0.15);

        session.observe("Fever", true).unwrap();
        let with_fever = session.posterior("Pneumonia").unwrap();
        assert!(with_fever > 0.15);

        session.observe("Crackles", true).unwrap();
        assert_eq!(session.evidence().len(), 2);

        session.clear_evidence();
        assert_eq!(session.posterior("Pneumonia").unwrap(), 0.15);
    }

    #[test]
    fn test_rejects_unknown_evidence() {
        let mut session = session();
        session.observe("Fever", true).unwrap();

        let err = session
            .set_evidence(HashMap::from([("Rash".to_string(), true)]))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(session.evidence().get("Fever"), Some(true));

        assert!(session.observe("Rash", true).is_err());
        assert_eq!(session.evidence().len(), 1);
    }

    #[test]
    fn test_diagnostic_queries_leave_evidence_alone() {
        let mut session = session();
        session
            .set_evidence(HashMap::from([
                ("Fever".to_string(), true),
                ("Hemoptysis".to_string(), false),
            ]))
            .unwrap();
        let before = session.evidence().clone();
        let posterior_before = session.posterior("Infection").unwrap();

        session.marginal_symptom_probability("Crackles").unwrap();
        session.likelihood_ratio("Calcified_Plaques", "Asbestosis").unwrap();
        assert!(session.likelihood_ratio("Rash", "Asbestosis").is_err());

        assert_eq!(session.evidence(), &before);
        assert_eq!(session.posterior("Infection").unwrap(), posterior_before);
    }

    #[test]
    fn test_sampling_ignores_evidence() {
        let mut session = session();
        session.observe("Fever", false).unwrap();
        let case = session
            .sample_case(&["Pneumonia"], &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(case.findings.len(), 13);
        assert_eq!(session.evidence().len(), 1);
        assert_eq!(session.evidence().get("Fever"), Some(false));
    }

    #[test]
    fn test_most_likely_with_fever_and_crackles() {
        let mut session = session();
        session.observe("Fever", true).unwrap();
        session.observe("Crackles", true).unwrap();
        let (best, probability) = session.most_likely_disease().unwrap().unwrap();
        assert_eq!(best, "Pneumonia");
        assert!(probability > 0.5);
        assert_eq!(session.rank_diseases().unwrap()[0].0, "Pneumonia");
    }
}
