/*!
Revision of a sentence, before the sentence is used to revise a belief state.

A sentence revision models (partial) trust in the source of a sentence.

- [CompleteTrust] leaves the sentence unchanged.
- [NoTrust] ignores the sentence, replacing it with the belief state.
- [TrustPartitionRevision] generalises the sentence to the union of the *trust partitions* it overlaps.

# Trust partitions

A trust partition revision is built from a collection of propositions, intended (though not required) to be pairwise exclusive.
To these, a catch-all partition is appended: the negation of the disjunction of the given partitions.
So, every valuation belongs to some given partition or to the catch-all.

To revise a sentence, each partition is tested for satisfiability in conjunction with the sentence, and the disjunction of every such partition is returned.

```rust
# use belief_revisor::structures::proposition::Proposition;
# use belief_revisor::trust::{SentenceRevision, TrustPartitionRevision};
let a: Proposition = "a".parse().unwrap();
let b: Proposition = "b and -a".parse().unwrap();

let revision = TrustPartitionRevision::from_partitions([a.clone(), b]).unwrap();

// The sentence is more precise than the partition it overlaps.
let revised = revision.revise(&"a and c".parse().unwrap());
assert_eq!(revised.models(), a.models());
```

Partitions may also be built from a set of atoms, with one partition for each valuation of the atoms.
These partitions are exhaustive, and trust extends only to what the sentence says of the atoms.

An unsatisfiable sentence overlaps no partition, and revises to a contradiction.
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom, belief_state::BeliefState, proposition::Proposition, valuation::Valuation,
    },
    types::err::{self},
};

/// Something which revises a sentence.
pub trait SentenceRevision {
    fn revise(&self, sentence: &Proposition) -> Proposition;
}

/// The sentence, unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompleteTrust {}

impl SentenceRevision for CompleteTrust {
    fn revise(&self, sentence: &Proposition) -> Proposition {
        sentence.clone()
    }
}

/// The conjunction of some belief state, regardless of the sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoTrust {
    belief: Proposition,
}

impl NoTrust {
    pub fn new(belief_state: &BeliefState) -> Self {
        NoTrust {
            belief: belief_state.conjunction(),
        }
    }
}

impl SentenceRevision for NoTrust {
    fn revise(&self, _sentence: &Proposition) -> Proposition {
        self.belief.clone()
    }
}

/// Generalisation of a sentence to the trust partitions it overlaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrustPartitionRevision {
    /// The given partitions, followed by the catch-all.
    partitions: Vec<Proposition>,
}

impl TrustPartitionRevision {
    /// A trust partition revision from the given partitions, with a catch-all partition appended.
    ///
    /// At least one partition is required.
    pub fn from_partitions(
        partitions: impl IntoIterator<Item = Proposition>,
    ) -> Result<Self, err::ConfigurationError> {
        let mut partitions = partitions.into_iter().collect::<Vec<_>>();
        if partitions.is_empty() {
            return Err(err::ConfigurationError::NoPartitions);
        }

        let catch_all = Proposition::disjunction(partitions.iter().cloned()).negate();
        partitions.push(catch_all);

        log::debug!(target: targets::TRUST, "Trust partitions: {}", partitions.len());

        Ok(TrustPartitionRevision { partitions })
    }

    /// A trust partition revision with one partition for each valuation of the given atoms.
    ///
    /// The partitions are exhaustive, and so the catch-all partition is a contradiction.
    pub fn from_atoms<'a>(
        atoms: impl IntoIterator<Item = &'a Atom>,
    ) -> Result<Self, err::ConfigurationError> {
        let atoms = atoms.into_iter().collect::<BTreeSet<_>>();
        if atoms.is_empty() {
            return Err(err::ConfigurationError::NoAtoms);
        }

        let partitions = Valuation::enumerate(atoms)
            .iter()
            .map(Proposition::from_valuation)
            .collect::<Vec<_>>();

        Self::from_partitions(partitions)
    }

    /// The partitions, with the catch-all last.
    pub fn partitions(&self) -> &[Proposition] {
        &self.partitions
    }
}

impl SentenceRevision for TrustPartitionRevision {
    fn revise(&self, sentence: &Proposition) -> Proposition {
        let overlapping = self
            .partitions
            .iter()
            .filter(|partition| sentence.clone().and((*partition).clone()).is_satisfiable())
            .cloned()
            .collect::<Vec<_>>();

        log::debug!(target: targets::TRUST, "{sentence} overlaps {} of {} partitions", overlapping.len(), self.partitions.len());

        Proposition::disjunction(overlapping)
    }
}

/// The kinds of sentence revision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TrustKind {
    /// [CompleteTrust].
    #[default]
    Complete,

    /// [NoTrust].
    None,

    /// A [TrustPartitionRevision] over each valuation of the atoms.
    Atoms(BTreeSet<Atom>),

    /// A [TrustPartitionRevision] over the sentences, together with the catch-all.
    Sentences(Vec<Proposition>),
}

impl TrustKind {
    /// Identifiers for each kind, as used when configuring from text.
    pub const NAMES: [&'static str; 4] = ["complete", "none", "atoms", "sentences"];

    /// A sentence revision of this kind, for the given belief state.
    pub fn sentence_revision(
        &self,
        belief_state: &BeliefState,
    ) -> Result<Box<dyn SentenceRevision>, err::ConfigurationError> {
        match self {
            Self::Complete => Ok(Box::new(CompleteTrust::default())),

            Self::None => Ok(Box::new(NoTrust::new(belief_state))),

            Self::Atoms(atoms) => Ok(Box::new(TrustPartitionRevision::from_atoms(atoms)?)),

            Self::Sentences(sentences) => Ok(Box::new(TrustPartitionRevision::from_partitions(
                sentences.iter().cloned(),
            )?)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Complete => Self::NAMES[0],
            Self::None => Self::NAMES[1],
            Self::Atoms(_) => Self::NAMES[2],
            Self::Sentences(_) => Self::NAMES[3],
        }
    }
}

impl std::fmt::Display for TrustKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod trust_tests {
    use super::*;

    fn parse(text: &str) -> Proposition {
        text.parse().expect("parse failure")
    }

    #[test]
    fn catch_all_is_appended() {
        let revision = TrustPartitionRevision::from_partitions([parse("a"), parse("b")]).unwrap();
        assert_eq!(revision.partitions().len(), 3);

        let revised = revision.revise(&parse("-a and -b and c"));
        assert_eq!(revised.models(), parse("-(a or b)").models());
    }

    #[test]
    fn atom_partitions() {
        let atoms = [Atom::from("a"), Atom::from("b")];
        let revision = TrustPartitionRevision::from_atoms(atoms.iter()).unwrap();

        // Four valuations, and a contradictory catch-all.
        assert_eq!(revision.partitions().len(), 5);
        assert!(!revision.partitions()[4].is_satisfiable());

        let revised = revision.revise(&parse("a and b and c"));
        assert_eq!(revised.models(), parse("a and b").models());
    }

    #[test]
    fn no_atoms() {
        assert_eq!(
            TrustPartitionRevision::from_atoms(Vec::<&Atom>::new()),
            Err(err::ConfigurationError::NoAtoms)
        );
    }

    #[test]
    fn complete_and_no_trust() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let sentence = parse("-p");

        assert_eq!(CompleteTrust::default().revise(&sentence), sentence);
        assert_eq!(NoTrust::new(&belief_state).revise(&sentence), parse("p and q"));
    }

    #[test]
    fn kinds() {
        let belief_state = BeliefState::default();
        assert!(TrustKind::Sentences(vec![]).sentence_revision(&belief_state).is_err());
        assert!(TrustKind::Atoms(BTreeSet::default()).sentence_revision(&belief_state).is_err());
        assert!(TrustKind::None.sentence_revision(&belief_state).is_ok());
    }
}
