/*!
Belief states, aka. finite sets of propositions.

A belief state is interpreted as the conjunction of its propositions.
- The empty belief state is vacuous, and interpreted as [Top](Proposition::Top).
- A belief state may be jointly unsatisfiable, in which case it has no models.

Neither case is an error.

```rust
# use belief_revisor::structures::belief_state::BeliefState;
# use belief_revisor::structures::proposition::Proposition;
let vacuous = BeliefState::default();
assert_eq!(vacuous.conjunction(), Proposition::Top);
assert!(vacuous.is_consistent());

let inconsistent = BeliefState::from(["p".parse().unwrap(), "-p".parse().unwrap()]);
assert!(inconsistent.models().is_empty());
```
*/

use std::collections::BTreeSet;

use crate::structures::{atom::Atom, proposition::Proposition, valuation::Models};

/// A finite set of propositions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BeliefState {
    propositions: BTreeSet<Proposition>,
}

impl BeliefState {
    pub fn insert(&mut self, proposition: Proposition) -> bool {
        self.propositions.insert(proposition)
    }

    pub fn is_empty(&self) -> bool {
        self.propositions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.propositions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Proposition> {
        self.propositions.iter()
    }

    /// The conjunction of every proposition in the belief state, or [Top](Proposition::Top) if there are none.
    pub fn conjunction(&self) -> Proposition {
        Proposition::conjunction(self.propositions.iter().cloned())
    }

    /// The atoms which occur in some proposition of the belief state.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.propositions
            .iter()
            .flat_map(|proposition| proposition.atoms())
            .collect()
    }

    /// The models of the conjunction of the belief state.
    pub fn models(&self) -> Models {
        self.conjunction().models()
    }

    /// Whether the belief state is jointly satisfiable.
    pub fn is_consistent(&self) -> bool {
        self.conjunction().is_satisfiable()
    }
}

impl<const N: usize> From<[Proposition; N]> for BeliefState {
    fn from(propositions: [Proposition; N]) -> Self {
        BeliefState {
            propositions: BTreeSet::from(propositions),
        }
    }
}

impl FromIterator<Proposition> for BeliefState {
    fn from_iter<I: IntoIterator<Item = Proposition>>(iter: I) -> Self {
        BeliefState {
            propositions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BeliefState {
    type Item = Proposition;
    type IntoIter = std::collections::btree_set::IntoIter<Proposition>;

    fn into_iter(self) -> Self::IntoIter {
        self.propositions.into_iter()
    }
}

impl<'a> IntoIterator for &'a BeliefState {
    type Item = &'a Proposition;
    type IntoIter = std::collections::btree_set::Iter<'a, Proposition>;

    fn into_iter(self) -> Self::IntoIter {
        self.propositions.iter()
    }
}
