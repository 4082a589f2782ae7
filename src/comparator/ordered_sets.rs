//! Ranking by an ordered partition of valuations.
//!
//! The ordered partition is given as a sequence of propositions, and a valuation is ranked by the first proposition true on the valuation.
//! The sequence is bracketed by:
//! - The conjunction of the belief state, at rank 0.
//! - A tautology, at the final rank, so every valuation has some rank.
//!
//! The propositions need not partition the valuations: a valuation true on many propositions is ranked by the first.
//!
//! # Random orderings
//!
//! An ordered partition of all valuations over some atoms may be generated at random with [random_ordering].
//!
//! ```rust
//! # use belief_revisor::comparator::random_ordering;
//! # use belief_revisor::structures::atom::Atom;
//! # use rand::SeedableRng;
//! let atoms = ["a", "b", "c"].map(Atom::from);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let ordering = random_ordering(&atoms, 3, &mut rng).unwrap();
//! assert!(!ordering.is_empty() && ordering.len() <= 3);
//!
//! let count = ordering.iter().map(|bucket| bucket.models().len()).sum::<usize>();
//! assert_eq!(count, 8);
//! ```

use rand::{seq::SliceRandom, Rng};

use crate::{
    comparator::{Rank, Ranking},
    structures::{
        atom::Atom, belief_state::BeliefState, proposition::Proposition, valuation::Valuation,
    },
    types::err::{self},
};

pub struct OrderedSets {
    /// The complete sequence, from the belief state to the final tautology.
    ranks: Vec<Proposition>,
}

impl OrderedSets {
    pub fn new(belief_state: &BeliefState, partitions: Vec<Proposition>) -> Self {
        let mut ranks = Vec::with_capacity(partitions.len() + 2);
        ranks.push(belief_state.conjunction());
        ranks.extend(partitions);
        ranks.push(Proposition::Top);

        OrderedSets { ranks }
    }

    /// The complete sequence of propositions, including the belief state and the final tautology.
    pub fn ranks(&self) -> &[Proposition] {
        &self.ranks
    }
}

impl Ranking for OrderedSets {
    fn rank(&self, valuation: &Valuation) -> Rank {
        let index = self
            .ranks
            .iter()
            .position(|proposition| proposition.is_true_on(valuation))
            // Unreachable, as the final proposition is a tautology.
            .unwrap_or(self.ranks.len());
        index as Rank
    }
}

/// A random ordered partition of every valuation of the given atoms.
///
/// Valuations are shuffled and each is placed in one of `buckets` buckets, chosen uniformly.
/// Empty buckets are dropped, and each remaining bucket is returned as the disjunction of the characteristic propositions of its valuations.
///
/// An error is returned if there are no atoms or no buckets.
pub fn random_ordering<'a, R: Rng + ?Sized>(
    atoms: impl IntoIterator<Item = &'a Atom>,
    buckets: usize,
    rng: &mut R,
) -> Result<Vec<Proposition>, err::ConfigurationError> {
    if buckets == 0 {
        return Err(err::ConfigurationError::NoBuckets);
    }

    let atoms = atoms.into_iter().collect::<Vec<_>>();
    if atoms.is_empty() {
        return Err(err::ConfigurationError::NoAtoms);
    }

    let mut valuations = Valuation::enumerate(atoms);
    valuations.shuffle(rng);

    let mut filled = vec![Vec::default(); buckets];
    for valuation in &valuations {
        filled[rng.gen_range(0..buckets)].push(Proposition::from_valuation(valuation));
    }

    Ok(filled
        .into_iter()
        .filter(|bucket| !bucket.is_empty())
        .map(Proposition::disjunction)
        .collect())
}
