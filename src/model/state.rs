use crate::network::Network;

/// A complete present/absent assignment over every disease of a network.
///
/// Bit `i` is set when disease `i` (declaration order) is present. Only used
/// inside enumeration and sampling; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiseaseState(u32);

impl DiseaseState {
    pub fn none() -> Self {
        DiseaseState(0)
    }

    pub fn from_bits(bits: u32) -> Self {
        DiseaseState(bits)
    }

    pub fn from_present<I: IntoIterator<Item = usize>>(diseases: I) -> Self {
        diseases
            .into_iter()
            .fold(DiseaseState::none(), |state, disease| state.with(disease))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_present(self, disease: usize) -> bool {
        self.0 & (1 << disease) != 0
    }

    pub fn with(self, disease: usize) -> Self {
        DiseaseState(self.0 | (1 << disease))
    }

    pub fn without(self, disease: usize) -> Self {
        DiseaseState(self.0 & !(1 << disease))
    }

    pub fn present_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Every assignment over `disease_count` diseases, `2^disease_count` in total.
    pub fn all(disease_count: usize) -> impl Iterator<Item = DiseaseState> {
        (0..(1u32 << disease_count)).map(DiseaseState)
    }

    /// Prior probability of this assignment under disease independence:
    /// `prior` for each present disease, `1 - prior` for each absent one.
    pub fn prior_weight(self, network: &Network) -> f64 {
        network
            .diseases()
            .iter()
            .enumerate()
            .map(|(id, disease)| {
                if self.is_present(id) {
                    disease.prior
                } else {
                    1.0 - disease.prior
                }
            })
            .product()
    }
}
