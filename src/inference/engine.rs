//! Exact inference by enumeration.
//!
//! Every query visits all `2^n` disease-state assignments of the network
//! (`n <= MAX_ENUMERABLE_DISEASES`). For each assignment the prior weight is
//! the product of independent disease priors, and the evidence likelihood is
//! the product of Noisy-OR observation probabilities over the observed
//! symptoms only. Unobserved symptoms sum to one and drop out.
//!
//! Evidence is always an explicit argument, so an engine is immutable and can
//! be shared across threads behind an `Arc`.

use crate::common::errors::Result;
use crate::inference::evidence::Evidence;
use crate::inference::table::{DiseasePosterior, PosteriorTable};
use crate::model::{DiseaseState, observation_likelihood, presence_probability};
use crate::network::Network;
use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

/// Posterior of one disease together with the total probability of the evidence.
///
/// `evidence_probability == 0.0` means the evidence is impossible under the
/// model; the posterior is then reported as `0.0` by convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PosteriorQuery {
    pub posterior: f64,
    pub evidence_probability: f64,
}

impl PosteriorQuery {
    pub fn is_degenerate(&self) -> bool {
        self.evidence_probability == 0.0
    }
}

/// Display probability of a symptom for a case view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomProbability {
    pub name: String,
    pub probability: f64,
    /// The recorded value when the symptom was observed
    pub observed: Option<bool>,
}

/// Evidence resolved to symptom ids, sorted by id so products are taken in a
/// fixed order.
pub(crate) type Observations = Vec<(usize, bool)>;

#[derive(Debug, Clone)]
pub struct InferenceEngine {
    network: Arc<Network>,
}

impl InferenceEngine {
    pub fn new(network: Network) -> Self {
        Self::from_shared(Arc::new(network))
    }

    pub fn from_shared(network: Arc<Network>) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn shared_network(&self) -> Arc<Network> {
        Arc::clone(&self.network)
    }

    pub(crate) fn resolve(&self, evidence: &Evidence) -> Result<Observations> {
        let mut observations = evidence
            .iter()
            .map(|(symptom, observed)| {
                self.network
                    .symptom_id(symptom)
                    .map(|symptom| (symptom, observed))
            })
            .collect::<Result<Observations>>()?;
        observations.sort_unstable_by_key(|(symptom, _)| *symptom);
        Ok(observations)
    }

    fn likelihood(&self, observations: &[(usize, bool)], state: DiseaseState) -> f64 {
        let symptoms = self.network.symptoms();
        observations
            .iter()
            .map(|&(symptom, observed)| observation_likelihood(&symptoms[symptom], state, observed))
            .product()
    }

    /// Sums `(numerator, denominator)` over all assignments, where the
    /// numerator only collects assignments with `disease` present.
    fn enumerate(&self, disease: usize, observations: &[(usize, bool)]) -> (f64, f64) {
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for state in DiseaseState::all(self.network.disease_count()) {
            let joint = state.prior_weight(&self.network) * self.likelihood(observations, state);
            denominator += joint;
            if state.is_present(disease) {
                numerator += joint;
            }
        }
        (numerator, denominator)
    }

    fn query_resolved(&self, disease: usize, observations: &[(usize, bool)]) -> PosteriorQuery {
        if observations.is_empty() {
            return PosteriorQuery {
                posterior: self.network.diseases()[disease].prior,
                evidence_probability: 1.0,
            };
        }

        let (numerator, denominator) = self.enumerate(disease, observations);
        let posterior = if denominator == 0.0 {
            0.0
        } else {
            numerator / denominator
        };
        PosteriorQuery {
            posterior,
            evidence_probability: denominator,
        }
    }

    /// Posterior of `disease` and the probability of `evidence`
    pub fn query(&self, disease: &str, evidence: &Evidence) -> Result<PosteriorQuery> {
        let disease_id = self.network.disease_id(disease)?;
        let observations = self.resolve(evidence)?;
        debug!(
            "query {} with {} observations over {} assignments",
            disease,
            observations.len(),
            self.network.assignment_count()
        );
        Ok(self.query_resolved(disease_id, &observations))
    }

    /// Exact `P(disease present | evidence)`; `0.0` when the evidence is impossible.
    pub fn posterior(&self, disease: &str, evidence: &Evidence) -> Result<f64> {
        Ok(self.query(disease, evidence)?.posterior)
    }

    /// Total probability of `evidence` under the model
    pub fn evidence_probability(&self, evidence: &Evidence) -> Result<f64> {
        let observations = self.resolve(evidence)?;
        let total: f64 = DiseaseState::all(self.network.disease_count())
            .map(|state| state.prior_weight(&self.network) * self.likelihood(&observations, state))
            .sum();
        Ok(total.clamp(0.0, 1.0))
    }

    /// Posteriors for every disease, evaluated in parallel.
    pub fn posteriors_all(&self, evidence: &Evidence) -> Result<PosteriorTable> {
        let observations = self.resolve(evidence)?;
        debug!("querying all {} diseases", self.network.disease_count());
        let entries = self
            .network
            .diseases()
            .par_iter()
            .enumerate()
            .map(|(id, disease)| DiseasePosterior {
                name: disease.name.clone(),
                prior: disease.prior,
                posterior: self.query_resolved(id, &observations).posterior,
            })
            .collect();
        Ok(PosteriorTable::new(entries))
    }

    /// `(disease, posterior)` pairs, most probable first
    pub fn rank_diseases(&self, evidence: &Evidence) -> Result<Vec<(String, f64)>> {
        Ok(self.posteriors_all(evidence)?.ranked())
    }

    pub fn most_likely_disease(&self, evidence: &Evidence) -> Result<Option<(String, f64)>> {
        Ok(self.rank_diseases(evidence)?.into_iter().next())
    }

    /// `P(symptom present)` with no evidence at all.
    pub fn marginal_symptom_probability(&self, symptom: &str) -> Result<f64> {
        let symptom = self.network.symptom(symptom)?;
        let total: f64 = DiseaseState::all(self.network.disease_count())
            .map(|state| state.prior_weight(&self.network) * presence_probability(symptom, state))
            .sum();
        Ok(total.clamp(0.0, 1.0))
    }

    /// `P(disease | symptom present) / P(disease | symptom absent)`.
    ///
    /// Values above one mean observing the symptom raises belief in the
    /// disease. Returns `f64::INFINITY` when the absent-side posterior is zero.
    pub fn likelihood_ratio(&self, symptom: &str, disease: &str) -> Result<f64> {
        let with_symptom = self.posterior(disease, &Evidence::single(symptom, true))?;
        let without_symptom = self.posterior(disease, &Evidence::single(symptom, false))?;
        trace!(
            "likelihood ratio {} -> {}: {} / {}",
            symptom, disease, with_symptom, without_symptom
        );
        if without_symptom == 0.0 {
            return Ok(f64::INFINITY);
        }
        Ok(with_symptom / without_symptom)
    }

    /// One entry per symptom in declaration order: observed symptoms show
    /// `1.0`/`0.0`, unobserved ones their no-evidence marginal.
    pub fn symptom_probabilities(&self, evidence: &Evidence) -> Result<Vec<SymptomProbability>> {
        self.resolve(evidence)?;
        self.network
            .symptoms()
            .iter()
            .map(|symptom| -> Result<SymptomProbability> {
                let observed = evidence.get(&symptom.name);
                let probability = match observed {
                    Some(true) => 1.0,
                    Some(false) => 0.0,
                    None => self.marginal_symptom_probability(&symptom.name)?,
                };
                Ok(SymptomProbability {
                    name: symptom.name.clone(),
                    probability,
                    observed,
                })
            })
            .collect()
    }
}
