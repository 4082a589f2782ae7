use crate::{
    comparator::{Rank, Ranking},
    structures::{proposition::Proposition, valuation::Valuation},
};

/// Ranks a valuation by the (negated) count of bias propositions true on the valuation.
///
/// The more biases a valuation satisfies, the closer the valuation.
/// No models of the belief state are required, and so this ranking is unaffected by an empty or inconsistent belief state.
pub struct SetInclusion {
    biases: Vec<Proposition>,
}

impl SetInclusion {
    pub fn new(biases: Vec<Proposition>) -> Self {
        SetInclusion { biases }
    }

    pub fn biases(&self) -> &[Proposition] {
        &self.biases
    }
}

impl Ranking for SetInclusion {
    fn rank(&self, valuation: &Valuation) -> Rank {
        let satisfied = self
            .biases
            .iter()
            .filter(|bias| bias.is_true_on(valuation))
            .count();
        -(satisfied as Rank)
    }
}
