//! Weighted Hamming distance.
//!
//! Each atom is given a (non-negative) weight, and the distance between two valuations is the sum of the weights of the atoms on which the valuations disagree.
//! Atoms without a weight have weight 0, and so disagreement on such an atom is free.
//!
//! ```rust
//! # use belief_revisor::comparator::Weights;
//! let weights = Weights::from_entries(["a = 5", "b=1"]).unwrap();
//! assert_eq!(weights.weight_of(&"a".into()), 5);
//! assert_eq!(weights.weight_of(&"c".into()), 0);
//!
//! assert!(Weights::from_entries(["a = 5", "a = 2"]).is_err());
//! assert!(Weights::from_entries(["a = -5"]).is_err());
//! ```

use std::collections::HashMap;

use crate::{
    comparator::{Rank, Ranking},
    structures::{atom::Atom, belief_state::BeliefState, valuation::Valuation},
    types::err::{self},
};

/// The weight of an atom.
///
/// Weights are unsigned, and so a negative weight can't be configured.
pub type Weight = u32;

/// A map from atoms to weights.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Weights {
    weights: HashMap<Atom, Weight>,
}

impl Weights {
    /// Weights from (atom, weight) pairs, with an error if some atom is given more than one weight.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Atom, Weight)>,
    ) -> Result<Self, err::ConfigurationError> {
        let mut weights = HashMap::default();
        for (atom, weight) in pairs {
            if weights.contains_key(&atom) {
                return Err(err::ConfigurationError::DuplicateWeight(atom));
            }
            weights.insert(atom, weight);
        }
        Ok(Weights { weights })
    }

    /// Weights from entries of the form `atom = weight`.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, err::ConfigurationError> {
        let pairs = entries
            .into_iter()
            .map(Weights::parse_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Weights::from_pairs(pairs)
    }

    /// Parses an entry of the form `atom = weight`, where the atom is alphabetic and the weight is a non-negative integer.
    pub fn parse_entry(entry: &str) -> Result<(Atom, Weight), err::ConfigurationError> {
        let malformed = || err::ConfigurationError::MalformedWeight(entry.to_string());

        let (name, weight) = entry.split_once('=').ok_or_else(malformed)?;
        let (name, weight) = (name.trim(), weight.trim());

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(malformed());
        }
        if weight.is_empty() || !weight.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }

        let weight = weight.parse::<Weight>().map_err(|_| malformed())?;
        Ok((Atom::from(name.to_lowercase()), weight))
    }

    /// The weight of an atom, 0 if the atom has no weight.
    pub fn weight_of(&self, atom: &Atom) -> Weight {
        self.weights.get(atom).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of the weights of the atoms on which the valuations disagree.
    pub fn distance(&self, a: &Valuation, b: &Valuation) -> Rank {
        a.disagreements(b)
            .map(|atom| self.weight_of(atom) as Rank)
            .sum()
    }
}

/// Ranks a valuation by the least weighted Hamming distance to a model of the belief state.
///
/// As with [HammingDistance](crate::comparator::HammingDistance), if the belief state has no models every valuation is ranked 0.
pub struct WeightedHammingDistance {
    belief_models: Vec<Valuation>,
    weights: Weights,
}

impl WeightedHammingDistance {
    pub fn new(belief_state: &BeliefState, weights: Weights) -> Self {
        WeightedHammingDistance {
            belief_models: belief_state.models().into_iter().collect(),
            weights,
        }
    }
}

impl Ranking for WeightedHammingDistance {
    fn rank(&self, valuation: &Valuation) -> Rank {
        self.belief_models
            .iter()
            .map(|model| self.weights.distance(valuation, model))
            .min()
            .unwrap_or(0)
    }
}
