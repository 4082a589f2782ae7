/*!
Revision of a belief state by a sentence.

# Overview

A [ComparatorRevision] revises a belief state by selecting, from the models of the sentence, those closest to the belief state according to a [comparator](crate::comparator).

In some more detail, to revise a belief state 𝐁 by a sentence 𝐒:
1. A comparator is built for 𝐁.
2. The atoms of 𝐒 and 𝐁 are gathered into an *atom closure*, the conjunction of `a or -a` for each atom `a`.
3. The candidate models are the models of 𝐒 conjoined with the atom closure.
4. If there are no candidates the revision is a contradiction.
5. Otherwise, some candidate of least rank is found, and every candidate tied with it is selected.
6. The revised belief state contains a single proposition: the disjunction of the characteristic propositions of the selected candidates.

The atom closure ensures the candidates value every atom of the belief state, even those absent from the sentence.
Without this, two candidates which differ only on an atom absent from 𝐒 would be enumerated as one, and the revision would say nothing about that atom.

# Example

```rust
# use belief_revisor::comparator::ComparatorKind;
# use belief_revisor::revision::{BeliefRevision, ComparatorRevision};
# use belief_revisor::structures::belief_state::BeliefState;
# use belief_revisor::structures::proposition::Proposition;
let belief_state = BeliefState::from(["p or q".parse().unwrap()]);
let sentence: Proposition = "q or r".parse().unwrap();

let revised = ComparatorRevision::new(ComparatorKind::Hamming).revise(&belief_state, &sentence);

// The sentence is consistent with the belief state, so the revision is their conjunction.
let expected = belief_state.conjunction().and(sentence);
assert_eq!(revised.models(), expected.models());
```

# Failure

A revision never fails.
- An unsatisfiable sentence revises to a contradiction, which is [distinguished](ComparatorRevision::revise) from other revisions.
- An empty belief state is vacuous, and read as a tautology.
*/

use crate::{
    comparator::ComparatorKind,
    misc::log::targets::{self},
    structures::{
        atom::Atom, belief_state::BeliefState, proposition::Proposition, valuation::Models,
    },
};

/// Something which revises a belief state by a sentence.
pub trait BeliefRevision {
    /// The revision of the belief state by the sentence.
    fn revise(&self, belief_state: &BeliefState, sentence: &Proposition) -> BeliefState;
}

/// Revision by minimal models, relative to a comparator built for each belief state revised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparatorRevision {
    kind: ComparatorKind,
}

impl ComparatorRevision {
    pub fn new(kind: ComparatorKind) -> Self {
        ComparatorRevision { kind }
    }

    pub fn kind(&self) -> &ComparatorKind {
        &self.kind
    }

    /// The candidates of least rank, relative to the belief state.
    ///
    /// Every candidate tied for least rank is returned, and if there are no candidates, no candidates are returned.
    pub fn nearest_models(&self, belief_state: &BeliefState, candidates: &Models) -> Models {
        let mut comparator = self.kind.comparator(belief_state);

        // Ties are resolved by enumeration order, as this only fixes the rank selected against.
        let mut nearest = match candidates.iter().next() {
            Some(first) => first,
            None => return Models::default(),
        };
        for candidate in candidates.iter().skip(1) {
            if comparator.compare(candidate, nearest).is_lt() {
                nearest = candidate;
            }
        }

        log::debug!(target: targets::REVISION, "Least rank {} at: {nearest}", comparator.rank(nearest));

        let selected = candidates
            .iter()
            .filter(|candidate| comparator.compare(nearest, candidate).is_eq())
            .cloned()
            .collect::<Models>();

        log::debug!(target: targets::REVISION, "Selected {} of {} candidates", selected.len(), candidates.len());

        selected
    }
}

/// The conjunction of `a or -a` for each of the given atoms.
pub fn atom_closure(atoms: impl IntoIterator<Item = Atom>) -> Proposition {
    Proposition::conjunction(atoms.into_iter().map(|atom| {
        let atom = Proposition::from(atom);
        atom.clone().or(atom.negate())
    }))
}

impl BeliefRevision for ComparatorRevision {
    /// The revision of the belief state by the sentence.
    ///
    /// The revised belief state contains exactly one proposition.
    /// If the sentence is unsatisfiable, this proposition is the empty disjunction, [Bottom](Proposition::Bottom).
    fn revise(&self, belief_state: &BeliefState, sentence: &Proposition) -> BeliefState {
        let mut atoms = belief_state.atoms();
        atoms.extend(sentence.atoms());

        log::debug!(target: targets::REVISION, "Revising {} sentences by {sentence} over {} atoms", belief_state.len(), atoms.len());

        let closure = atom_closure(atoms);
        let candidates = sentence.clone().and(closure).models();

        log::debug!(target: targets::MODELS, "{} candidate models", candidates.len());

        let selected = self.nearest_models(belief_state, &candidates);

        if selected.is_empty() {
            log::debug!(target: targets::REVISION, "No candidate models, revising to a contradiction");
        }

        BeliefState::from([Proposition::disjunction(
            selected.iter().map(Proposition::from_valuation),
        )])
    }
}

