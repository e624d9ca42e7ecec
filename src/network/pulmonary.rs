//! Built-in pulmonary differential-diagnosis network.
//!
//! Priors and causal strengths are clinician-elicited estimates for nine
//! pulmonary conditions and thirteen findings.

use crate::network::models::{DiseaseSpec, NetworkSpec, SymptomSpec};

pub const PULMONARY_DISEASES: [(&str, f64); 9] = [
    ("Asbestosis", 0.05),
    ("Edema", 0.10),
    ("Pneumonia", 0.15),
    ("Hemorrhage", 0.02),
    ("Fibrosis", 0.03),
    ("Infection", 0.12),
    ("LV_Decomp", 0.08),
    ("COPD", 0.10),
    ("PE", 0.05),
];

pub fn pulmonary_diseases() -> Vec<DiseaseSpec> {
    PULMONARY_DISEASES
        .iter()
        .map(|(name, prior)| DiseaseSpec::new(name, *prior))
        .collect()
}

pub fn pulmonary_symptoms() -> Vec<SymptomSpec> {
    vec![
        SymptomSpec::new(
            "Progressive_Dyspnea",
            0.05,
            &[
                ("Asbestosis", 0.75),
                ("Edema", 0.85),
                ("Pneumonia", 0.60),
                ("Hemorrhage", 0.70),
                ("Fibrosis", 0.80),
                ("Infection", 0.65),
                ("LV_Decomp", 0.90),
                ("COPD", 0.85),
                ("PE", 0.70),
            ],
        ),
        SymptomSpec::new(
            "Crackles",
            0.02,
            &[
                ("Asbestosis", 0.70),
                ("Edema", 0.90),
                ("Pneumonia", 0.80),
                ("Hemorrhage", 0.60),
                ("Fibrosis", 0.85),
                ("Infection", 0.75),
                ("LV_Decomp", 0.95),
                ("COPD", 0.40),
                ("PE", 0.30),
            ],
        ),
        SymptomSpec::new(
            "Hypoxemia",
            0.01,
            &[
                ("Asbestosis", 0.75),
                ("Edema", 0.90),
                ("Pneumonia", 0.85),
                ("Hemorrhage", 0.80),
                ("Fibrosis", 0.80),
                ("Infection", 0.80),
                ("LV_Decomp", 0.95),
                ("COPD", 0.90),
                ("PE", 0.85),
            ],
        ),
        SymptomSpec::new(
            "Tachypnea",
            0.03,
            &[
                ("Asbestosis", 0.60),
                ("Edema", 0.80),
                ("Pneumonia", 0.70),
                ("Hemorrhage", 0.65),
                ("Fibrosis", 0.65),
                ("Infection", 0.75),
                ("LV_Decomp", 0.90),
                ("COPD", 0.85),
                ("PE", 0.80),
            ],
        ),
        SymptomSpec::new("Fever", 0.01, &[("Pneumonia", 0.90), ("Infection", 0.95)]),
        SymptomSpec::new(
            "Chest_Pain",
            0.02,
            &[
                ("Asbestosis", 0.10),
                ("Edema", 0.30),
                ("Pneumonia", 0.40),
                ("Hemorrhage", 0.35),
                ("Fibrosis", 0.15),
                ("Infection", 0.25),
                ("LV_Decomp", 0.40),
                ("COPD", 0.20),
                ("PE", 0.85),
            ],
        ),
        SymptomSpec::new(
            "Hemoptysis",
            0.005,
            &[
                ("Hemorrhage", 0.95),
                ("PE", 0.20),
                ("Pneumonia", 0.15),
                ("Edema", 0.10),
                ("Infection", 0.10),
            ],
        ),
        SymptomSpec::new(
            "Elevated_JVP",
            0.01,
            &[
                ("LV_Decomp", 0.95),
                ("Edema", 0.70),
                ("PE", 0.40),
                ("COPD", 0.30),
                ("Fibrosis", 0.20),
            ],
        ),
        SymptomSpec::new(
            "Bilateral_Opacities",
            0.01,
            &[
                ("Edema", 0.95),
                ("Pneumonia", 0.90),
                ("LV_Decomp", 0.90),
                ("Hemorrhage", 0.85),
                ("Infection", 0.80),
                ("Fibrosis", 0.40),
            ],
        ),
        SymptomSpec::new(
            "RV_Dysfunction",
            0.005,
            &[
                ("PE", 0.80),
                ("COPD", 0.60),
                ("Fibrosis", 0.50),
                ("Asbestosis", 0.40),
                ("LV_Decomp", 0.30),
            ],
        ),
        SymptomSpec::new("Calcified_Plaques", 0.001, &[("Asbestosis", 0.95)]),
        SymptomSpec::new(
            "Pulm_Hypertension",
            0.005,
            &[
                ("PE", 0.85),
                ("COPD", 0.70),
                ("Fibrosis", 0.60),
                ("Asbestosis", 0.40),
            ],
        ),
        SymptomSpec::new(
            "Altered_Mental_Status",
            0.01,
            &[
                ("LV_Decomp", 0.40),
                ("Infection", 0.30),
                ("COPD", 0.25),
                ("Pneumonia", 0.20),
                ("PE", 0.15),
                ("Edema", 0.15),
            ],
        ),
    ]
}

impl NetworkSpec {
    /// The full built-in pulmonary network description.
    pub fn pulmonary() -> NetworkSpec {
        NetworkSpec::new(pulmonary_diseases(), pulmonary_symptoms())
    }

    /// Pairs externally authored symptom records with the fixed pulmonary
    /// disease set.
    pub fn with_pulmonary_diseases(symptoms: Vec<SymptomSpec>) -> NetworkSpec {
        NetworkSpec::new(pulmonary_diseases(), symptoms)
    }
}

/// Clinician-facing name for a pulmonary disease; unknown names pass through.
pub fn disease_display_name(name: &str) -> &str {
    match name {
        "Asbestosis" => "Pulmonary Asbestosis",
        "Edema" => "Pulmonary Edema",
        "Pneumonia" => "Pneumonia",
        "Hemorrhage" => "Pulmonary Hemorrhage",
        "Fibrosis" => "Accelerated Pulmonary Fibrosis",
        "Infection" => "Infection (bacterial/viral/fungal)",
        "LV_Decomp" => "Acute LV Decompensation",
        "COPD" => "COPD Exacerbation",
        "PE" => "Pulmonary Embolism",
        other => other,
    }
}

/// Clinician-facing name for a pulmonary finding; unknown names pass through.
pub fn symptom_display_name(name: &str) -> &str {
    match name {
        "Progressive_Dyspnea" => "Progressive Dyspnea",
        "Crackles" => "Crackles/Rales",
        "Hypoxemia" => "Hypoxemia",
        "Tachypnea" => "Tachypnea",
        "Fever" => "Fever",
        "Chest_Pain" => "Chest Pain",
        "Hemoptysis" => "Hemoptysis",
        "Elevated_JVP" => "Elevated JVP",
        "Bilateral_Opacities" => "Bilateral Air-Space Opacities",
        "RV_Dysfunction" => "Right Ventricular Dysfunction",
        "Calcified_Plaques" => "Calcified Pleural Plaques",
        "Pulm_Hypertension" => "Pulmonary Hypertension",
        "Altered_Mental_Status" => "Altered Mental Status",
        other => other,
    }
}
