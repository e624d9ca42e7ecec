use serde::{Deserialize, Serialize};

/// Static description of a disease: its name and prior probability of presence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseSpec {
    pub name: String,
    pub prior: f64,
}

/// One causal edge, read as "this disease alone triggers the symptom with `probability`"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseSpec {
    pub disease: String,
    pub probability: f64,
}

/// Static description of a symptom with its background leak and causes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomSpec {
    pub name: String,
    pub leak: f64,
    #[serde(default)]
    pub causes: Vec<CauseSpec>,
}

/// The configuration-level network description, exactly as authored.
///
/// Nothing here is validated; [`crate::network::Network::from_spec`] turns it
/// into the immutable, checked representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub diseases: Vec<DiseaseSpec>,
    pub symptoms: Vec<SymptomSpec>,
}

impl DiseaseSpec {
    pub fn new(name: &str, prior: f64) -> Self {
        Self {
            name: name.to_string(),
            prior,
        }
    }
}

impl CauseSpec {
    pub fn new(disease: &str, probability: f64) -> Self {
        Self {
            disease: disease.to_string(),
            probability,
        }
    }
}

impl SymptomSpec {
    pub fn new(name: &str, leak: f64, causes: &[(&str, f64)]) -> Self {
        Self {
            name: name.to_string(),
            leak,
            causes: causes
                .iter()
                .map(|(disease, probability)| CauseSpec::new(disease, *probability))
                .collect(),
        }
    }
}

impl NetworkSpec {
    pub fn new(diseases: Vec<DiseaseSpec>, symptoms: Vec<SymptomSpec>) -> Self {
        Self { diseases, symptoms }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Disease in a constructed network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disease {
    pub name: String,
    pub prior: f64,
}

/// Causal edge resolved to the index of its disease
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cause {
    pub disease: usize,
    pub probability: f64,
}

/// Symptom in a constructed network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symptom {
    pub name: String,
    pub leak: f64,
    pub causes: Vec<Cause>,
}

impl Symptom {
    /// Causal probability for `disease`, if it is listed among the causes.
    pub fn cause_probability(&self, disease: usize) -> Option<f64> {
        self.causes
            .iter()
            .find(|cause| cause.disease == disease)
            .map(|cause| cause.probability)
    }
}
