/*!
Comparators, aka. total preorders on valuations.

A comparator ranks each valuation relative to some fixed belief state, and compares valuations by rank.
- Lower ranks are preferred, and the valuations of least rank among some collection are the 'closest' to the belief state.
- Distinct valuations may share a rank, and ties are meaningful: no tie is broken when selecting the closest valuations.

So, a comparator is reflexive, transitive, and total, though not antisymmetric.

# Rankings

The rank of a valuation is given by a [Ranking]. The rankings available are:
- [HammingDistance], the least count of disagreements with a model of the belief state.
- [WeightedHammingDistance], the least sum of the weights of disagreements with a model of the belief state.
- [SetInclusion], the negated count of some bias propositions true on the valuation.
- [OrderedSets], the index of the first of a sequence of propositions true on the valuation.

A [ComparatorKind] is a ranking waiting on a belief state, and is used to build a comparator for each revision.

# Memoization

The rank of each valuation is computed at most once during the life of a comparator.
Rankings may be expensive (e.g. the Hamming distance is found by a scan of every model of the belief state), while selection of the closest valuations compares the same valuation many times.

As rankings are pure, the cache is never invalidated, though the cache is private to the comparator and dropped with it.
In particular, a comparator is built for a single belief state and a fresh comparator should be built for each revision.

# Example

```rust
# use belief_revisor::comparator::ComparatorKind;
# use belief_revisor::structures::belief_state::BeliefState;
# use belief_revisor::structures::proposition::Proposition;
let belief_state = BeliefState::from(["p and q".parse().unwrap()]);
let mut comparator = ComparatorKind::Hamming.comparator(&belief_state);

let worlds = "p or -p or q or -q".parse::<Proposition>().unwrap().models();
let ranks = worlds.iter().map(|world| comparator.rank(world)).collect::<Vec<_>>();

assert_eq!(ranks.iter().min(), Some(&0));
assert_eq!(ranks.iter().max(), Some(&2));
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{belief_state::BeliefState, proposition::Proposition, valuation::Valuation},
};

mod hamming;
pub use hamming::HammingDistance;

mod weighted_hamming;
pub use weighted_hamming::{Weight, WeightedHammingDistance, Weights};

mod set_inclusion;
pub use set_inclusion::SetInclusion;

mod ordered_sets;
pub use ordered_sets::{random_ordering, OrderedSets};

/// The rank of a valuation, lower is closer.
///
/// Ranks may be negative, e.g. when given by [SetInclusion].
pub type Rank = i64;

/// Something which ranks valuations.
///
/// A ranking must be a pure function of the valuation (and whatever the ranking was built from).
pub trait Ranking {
    fn rank(&self, valuation: &Valuation) -> Rank;
}

/// The rankings a comparator may be built from.
pub enum Measure {
    Hamming(HammingDistance),
    WeightedHamming(WeightedHammingDistance),
    SetInclusion(SetInclusion),
    OrderedSets(OrderedSets),
}

impl Ranking for Measure {
    fn rank(&self, valuation: &Valuation) -> Rank {
        match self {
            Measure::Hamming(measure) => measure.rank(valuation),
            Measure::WeightedHamming(measure) => measure.rank(valuation),
            Measure::SetInclusion(measure) => measure.rank(valuation),
            Measure::OrderedSets(measure) => measure.rank(valuation),
        }
    }
}

/// A total preorder on valuations, memoizing the rank of each valuation.
pub struct Comparator {
    measure: Measure,

    /// Ranks computed so far.
    cache: HashMap<Valuation, Rank>,
}

impl Comparator {
    pub fn new(measure: Measure) -> Self {
        Comparator {
            measure,
            cache: HashMap::default(),
        }
    }

    /// The rank of the valuation, computed on first request.
    pub fn rank(&mut self, valuation: &Valuation) -> Rank {
        if let Some(rank) = self.cache.get(valuation) {
            return *rank;
        }

        let rank = self.measure.rank(valuation);
        log::trace!(target: targets::COMPARATOR, "Rank {rank}: {valuation}");
        self.cache.insert(valuation.clone(), rank);
        rank
    }

    /// Compares two valuations by rank.
    ///
    /// [Equal](std::cmp::Ordering::Equal) is returned whenever the valuations are tied, including distinct valuations.
    pub fn compare(&mut self, a: &Valuation, b: &Valuation) -> std::cmp::Ordering {
        let a_rank = self.rank(a);
        let b_rank = self.rank(b);
        a_rank.cmp(&b_rank)
    }

    /// A count of the valuations whose rank has been computed.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    pub fn measure(&self) -> &Measure {
        &self.measure
    }
}

/// A ranking, before the belief state to rank relative to is known.
///
/// Each kind carries whatever configuration it requires, and the belief state is supplied on [building a comparator](ComparatorKind::comparator).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ComparatorKind {
    #[default]
    Hamming,

    WeightedHamming(Weights),

    /// Ranking by bias propositions.
    /// Without biases, the propositions of the belief state are used.
    SetInclusion(Option<Vec<Proposition>>),

    /// Ranking by an ordered partition, given without the belief state and without the final tautology.
    OrderedSets(Vec<Proposition>),
}

impl ComparatorKind {
    /// The identifiers of each kind, as returned by [name](ComparatorKind::name).
    pub const NAMES: [&'static str; 4] = ["hamming", "weighted", "set-inclusion", "ordered-sets"];

    /// A fresh comparator, ranking relative to the given belief state.
    pub fn comparator(&self, belief_state: &BeliefState) -> Comparator {
        let measure = match self {
            ComparatorKind::Hamming => Measure::Hamming(HammingDistance::new(belief_state)),

            ComparatorKind::WeightedHamming(weights) => Measure::WeightedHamming(
                WeightedHammingDistance::new(belief_state, weights.clone()),
            ),

            ComparatorKind::SetInclusion(biases) => {
                let biases = match biases {
                    Some(biases) => biases.clone(),
                    None => belief_state.iter().cloned().collect(),
                };
                Measure::SetInclusion(SetInclusion::new(biases))
            }

            ComparatorKind::OrderedSets(partitions) => {
                Measure::OrderedSets(OrderedSets::new(belief_state, partitions.clone()))
            }
        };

        Comparator::new(measure)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComparatorKind::Hamming => Self::NAMES[0],
            ComparatorKind::WeightedHamming(_) => Self::NAMES[1],
            ComparatorKind::SetInclusion(_) => Self::NAMES[2],
            ComparatorKind::OrderedSets(_) => Self::NAMES[3],
        }
    }
}

impl std::fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod comparator_tests {
    use super::*;

    fn parse(text: &str) -> Proposition {
        text.parse().expect("parse failure")
    }

    #[test]
    fn default_biases() {
        let belief_state = BeliefState::from([parse("p"), parse("q or r")]);
        let comparator = ComparatorKind::SetInclusion(None).comparator(&belief_state);

        match comparator.measure() {
            Measure::SetInclusion(set_inclusion) => {
                assert_eq!(set_inclusion.biases(), &[parse("p"), parse("q or r")])
            }
            _ => panic!("expected set inclusion"),
        }
    }

    #[test]
    fn bracketed_ranks() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let comparator =
            ComparatorKind::OrderedSets(vec![parse("-p")]).comparator(&belief_state);

        match comparator.measure() {
            Measure::OrderedSets(ordered_sets) => assert_eq!(
                ordered_sets.ranks(),
                &[parse("p and q"), parse("-p"), Proposition::Top]
            ),
            _ => panic!("expected ordered sets"),
        }
    }

    #[test]
    fn comparison_by_rank() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let mut comparator = ComparatorKind::Hamming.comparator(&belief_state);

        let models = parse("-p or -q").models();
        let ranks = models.iter().map(|model| comparator.rank(model)).collect::<Vec<_>>();
        assert_eq!(ranks, vec![2, 1, 1]);

        let far = models.first().expect("missing model");
        let near = models.last().expect("missing model");
        assert!(comparator.compare(near, far).is_lt());
        assert_eq!(comparator.cached_count(), 3);
    }
}
