use crate::{
    comparator::{Rank, Ranking},
    structures::{belief_state::BeliefState, valuation::Valuation},
};

/// Ranks a valuation by the least Hamming distance to a model of the belief state.
///
/// If the belief state has no models every valuation is ranked 0, and so no valuation is preferred to any other.
pub struct HammingDistance {
    /// Models of the belief state, enumerated once on construction.
    belief_models: Vec<Valuation>,
}

impl HammingDistance {
    pub fn new(belief_state: &BeliefState) -> Self {
        HammingDistance {
            belief_models: belief_state.models().into_iter().collect(),
        }
    }
}

impl Ranking for HammingDistance {
    fn rank(&self, valuation: &Valuation) -> Rank {
        self.belief_models
            .iter()
            .map(|model| valuation.hamming_distance(model) as Rank)
            .min()
            .unwrap_or(0)
    }
}
