use crate::common::errors::{DiagnosisError, Result};
use crate::network::models::{Cause, Disease, NetworkSpec, Symptom};
use anyhow::Context;
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Upper bound on the number of diseases exact enumeration will visit.
///
/// Every query walks all `2^n` disease-state assignments, so 20 diseases means
/// roughly a million assignments per posterior.
pub const MAX_ENUMERABLE_DISEASES: usize = 20;

/// Immutable disease/symptom network with name lookups and a reverse index.
///
/// Diseases and symptoms keep the order in which they were declared; that
/// order is the tie-breaker for rankings and the draw order for sampling.
#[derive(Debug, Clone)]
pub struct Network {
    diseases: Vec<Disease>,
    symptoms: Vec<Symptom>,
    disease_index: HashMap<String, usize>,
    symptom_index: HashMap<String, usize>,
    /// disease -> symptoms it can cause
    disease_to_symptoms: Vec<Vec<usize>>,
}

fn check_probability(value: f64, what: &str) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DiagnosisError::Structural(format!(
            "{} must lie in [0, 1], got {}",
            what, value
        )))
    }
}

impl Network {
    /// Validates `spec` and builds the network.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Network> {
        if spec.diseases.len() > MAX_ENUMERABLE_DISEASES {
            return Err(DiagnosisError::TooManyDiseases {
                count: spec.diseases.len(),
                max: MAX_ENUMERABLE_DISEASES,
            });
        }

        let mut diseases = Vec::with_capacity(spec.diseases.len());
        let mut disease_index = HashMap::new();
        for disease in &spec.diseases {
            check_probability(disease.prior, &format!("prior of disease '{}'", disease.name))?;
            if disease_index
                .insert(disease.name.clone(), diseases.len())
                .is_some()
            {
                return Err(DiagnosisError::Structural(format!(
                    "duplicate disease '{}'",
                    disease.name
                )));
            }
            diseases.push(Disease {
                name: disease.name.clone(),
                prior: disease.prior,
            });
        }

        let mut symptoms = Vec::with_capacity(spec.symptoms.len());
        let mut symptom_index = HashMap::new();
        let mut disease_to_symptoms = vec![Vec::new(); diseases.len()];
        for symptom in &spec.symptoms {
            check_probability(symptom.leak, &format!("leak of symptom '{}'", symptom.name))?;
            let symptom_id = symptoms.len();
            if symptom_index.insert(symptom.name.clone(), symptom_id).is_some() {
                return Err(DiagnosisError::Structural(format!(
                    "duplicate symptom '{}'",
                    symptom.name
                )));
            }

            let mut causes: Vec<Cause> = Vec::with_capacity(symptom.causes.len());
            for cause in &symptom.causes {
                let disease = *disease_index.get(&cause.disease).ok_or_else(|| {
                    DiagnosisError::Structural(format!(
                        "symptom '{}' lists unknown cause '{}'",
                        symptom.name, cause.disease
                    ))
                })?;
                check_probability(
                    cause.probability,
                    &format!("probability of '{}' causing '{}'", cause.disease, symptom.name),
                )?;
                if causes.iter().any(|existing| existing.disease == disease) {
                    return Err(DiagnosisError::Structural(format!(
                        "symptom '{}' lists cause '{}' twice",
                        symptom.name, cause.disease
                    )));
                }
                causes.push(Cause {
                    disease,
                    probability: cause.probability,
                });
                disease_to_symptoms[disease].push(symptom_id);
            }

            symptoms.push(Symptom {
                name: symptom.name.clone(),
                leak: symptom.leak,
                causes,
            });
        }

        info!(
            "Built network with {} diseases and {} symptoms",
            diseases.len(),
            symptoms.len()
        );

        Ok(Network {
            diseases,
            symptoms,
            disease_index,
            symptom_index,
            disease_to_symptoms,
        })
    }

    /// Parses a JSON network description and builds the network
    pub fn from_json_str(json: &str) -> anyhow::Result<Network> {
        let spec = NetworkSpec::from_json_str(json).context("Failed to parse network description")?;
        let network = Network::from_spec(&spec).context("Invalid network description")?;
        Ok(network)
    }

    /// Loads a JSON network description from disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Network> {
        let path = path.as_ref();
        info!("Loading network from {}", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read network file {}", path.display()))?;
        Network::from_json_str(&json)
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn disease_count(&self) -> usize {
        self.diseases.len()
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    /// Number of disease-state assignments a single exact query enumerates.
    pub fn assignment_count(&self) -> u64 {
        1u64 << self.diseases.len()
    }

    pub fn disease_id(&self, name: &str) -> Result<usize> {
        self.disease_index
            .get(name)
            .copied()
            .ok_or_else(|| DiagnosisError::UnknownDisease(name.to_string()))
    }

    pub fn symptom_id(&self, name: &str) -> Result<usize> {
        self.symptom_index
            .get(name)
            .copied()
            .ok_or_else(|| DiagnosisError::UnknownSymptom(name.to_string()))
    }

    pub fn disease(&self, name: &str) -> Result<&Disease> {
        Ok(&self.diseases[self.disease_id(name)?])
    }

    pub fn symptom(&self, name: &str) -> Result<&Symptom> {
        Ok(&self.symptoms[self.symptom_id(name)?])
    }

    pub fn has_disease(&self, name: &str) -> bool {
        self.disease_index.contains_key(name)
    }

    pub fn has_symptom(&self, name: &str) -> bool {
        self.symptom_index.contains_key(name)
    }

    /// Names of the symptoms `disease` can cause, in declaration order
    pub fn symptoms_caused_by(&self, disease: &str) -> Result<Vec<&str>> {
        let id = self.disease_id(disease)?;
        debug!("{} causes {} symptoms", disease, self.disease_to_symptoms[id].len());
        Ok(self.disease_to_symptoms[id]
            .iter()
            .map(|&symptom| self.symptoms[symptom].name.as_str())
            .collect())
    }

    /// Names of the diseases listed as causes of `symptom`
    pub fn causes_of(&self, symptom: &str) -> Result<Vec<&str>> {
        let symptom = self.symptom(symptom)?;
        Ok(symptom
            .causes
            .iter()
            .map(|cause| self.diseases[cause.disease].name.as_str())
            .collect())
    }
}
