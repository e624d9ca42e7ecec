//! Noisy-OR symptom model.
//!
//! A symptom stays absent only if its background leak and every present
//! cause independently fail to trigger it:
//!
//! ```text
//! P(symptom | state) = 1 - (1 - leak) * prod_{present causes} (1 - p)
//! ```
//!
//! Absent diseases and diseases that are not causes contribute no factor.

use crate::model::state::DiseaseState;
use crate::network::Symptom;

/// Probability that `symptom` is present under `state`.
pub fn presence_probability(symptom: &Symptom, state: DiseaseState) -> f64 {
    let inhibition = symptom
        .causes
        .iter()
        .filter(|cause| state.is_present(cause.disease))
        .fold(1.0 - symptom.leak, |inhibition, cause| {
            inhibition * (1.0 - cause.probability)
        });
    1.0 - inhibition
}

/// Probability of observing `symptom` as `observed` under `state`.
pub fn observation_likelihood(symptom: &Symptom, state: DiseaseState, observed: bool) -> f64 {
    let present = presence_probability(symptom, state);
    if observed { present } else { 1.0 - present }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Cause;

    fn fever() -> Symptom {
        Symptom {
            name: "Fever".to_string(),
            leak: 0.01,
            causes: vec![
                Cause { disease: 0, probability: 0.90 },
                Cause { disease: 1, probability: 0.95 },
            ],
        }
    }

    #[test]
    fn test_leak_only() {
        let p = presence_probability(&fever(), DiseaseState::none());
        assert!((p - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_single_cause() {
        let p = presence_probability(&fever(), DiseaseState::from_present([0]));
        assert!((p - (1.0 - 0.99 * 0.10)).abs() < 1e-12);
    }

    #[test]
    fn test_combined_causes() {
        let p = presence_probability(&fever(), DiseaseState::from_present([0, 1]));
        assert!((p - (1.0 - 0.99 * 0.10 * 0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_non_cause_is_ignored() {
        let base = presence_probability(&fever(), DiseaseState::from_present([0]));
        let with_unrelated = presence_probability(&fever(), DiseaseState::from_present([0, 2]));
        assert_eq!(base, with_unrelated);
    }

    #[test]
    fn test_observation_likelihood_complements() {
        let state = DiseaseState::from_present([1]);
        let present = observation_likelihood(&fever(), state, true);
        let absent = observation_likelihood(&fever(), state, false);
        assert!((present + absent - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_certain_cause_forces_presence() {
        let symptom = Symptom {
            name: "Plaques".to_string(),
            leak: 0.0,
            causes: vec![Cause { disease: 0, probability: 1.0 }],
        };
        assert_eq!(presence_probability(&symptom, DiseaseState::from_present([0])), 1.0);
        assert_eq!(presence_probability(&symptom, DiseaseState::none()), 0.0);
    }
}
