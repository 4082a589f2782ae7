/*!
A function from atoms to truth values, aka. a 'situation' or 'world'.

A valuation is total on the atoms it contains and silent on all others.
In other words, the domain of a valuation is the set of atoms it contains, and two valuations may have distinct domains.

Valuations are compared, hashed, and ordered by content, and so may be used as keys and collected into [Models].

```rust
# use belief_revisor::structures::atom::Atom;
# use belief_revisor::structures::valuation::Valuation;
let p = Atom::from("p");
let q = Atom::from("q");

let all = Valuation::enumerate([&p, &q]);
assert_eq!(all.len(), 4);

let v = Valuation::from_iter([(p.clone(), true), (q.clone(), false)]);
assert_eq!(v.value_of(&p), Some(true));
assert_eq!(v.value_of(&Atom::from("r")), None);
assert_eq!(v.to_string(), "p -q");
```
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::structures::{atom::Atom, literal::Literal};

/// A set of valuations, typically all the models of some proposition.
///
/// The set is ordered, and so iteration over a collection of models is deterministic.
pub type Models = BTreeSet<Valuation>;

/// A (total) valuation of some set of atoms.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Valuation {
    values: BTreeMap<Atom, bool>,
}

impl Valuation {
    /// The value of an atom under the valuation, if the atom is part of the valuation.
    pub fn value_of(&self, atom: &Atom) -> Option<bool> {
        self.values.get(atom).copied()
    }

    /// Sets the value of an atom, returning the previous value of the atom, if any.
    pub fn set_value(&mut self, atom: Atom, value: bool) -> Option<bool> {
        self.values.insert(atom, value)
    }

    /// An iterator through the atoms of the valuation, in order.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.values.keys()
    }

    /// An iterator through all (Atom, Value) pairs, in atom order.
    pub fn atom_value_pairs(&self) -> impl Iterator<Item = (&Atom, bool)> {
        self.values.iter().map(|(atom, value)| (atom, *value))
    }

    /// The literals made true by the valuation, one for each atom.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.values
            .iter()
            .map(|(atom, value)| Literal::new(atom.clone(), *value))
    }

    /// A count of the atoms in the valuation.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }

    /// Atoms valued by both valuations on which the valuations disagree.
    ///
    /// Atoms outside the domain of either valuation are ignored.
    pub fn disagreements<'a>(&'a self, other: &'a Valuation) -> impl Iterator<Item = &'a Atom> {
        // Iterate over the smaller of the two domains.
        let (small, large) = match self.atom_count() <= other.atom_count() {
            true => (self, other),
            false => (other, self),
        };

        small
            .values
            .iter()
            .filter_map(move |(atom, value)| match large.value_of(atom) {
                Some(other_value) if other_value != *value => Some(atom),
                _ => None,
            })
    }

    /// The count of atoms on which the valuations disagree.
    ///
    /// Only atoms in the domain of both valuations are compared.
    pub fn hamming_distance(&self, other: &Valuation) -> usize {
        self.disagreements(other).count()
    }

    /// Every (total) valuation of the given atoms.
    ///
    /// Valuations are generated with atoms set false before true, in order of the given atoms.
    /// So, the first valuation sets every atom to false and the last sets every atom to true.
    /// For an empty collection of atoms there is exactly one valuation, the empty valuation.
    pub fn enumerate<'a>(atoms: impl IntoIterator<Item = &'a Atom>) -> Vec<Valuation> {
        let mut valuations = vec![Valuation::default()];

        for atom in atoms {
            valuations = valuations
                .into_iter()
                .flat_map(|valuation| {
                    [false, true].map(|value| {
                        let mut extended = valuation.clone();
                        extended.set_value(atom.clone(), value);
                        extended
                    })
                })
                .collect();
        }

        valuations
    }
}

impl FromIterator<(Atom, bool)> for Valuation {
    fn from_iter<I: IntoIterator<Item = (Atom, bool)>>(iter: I) -> Self {
        Valuation {
            values: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", literals.join(" "))
    }
}

#[cfg(test)]
mod valuation_tests {
    use super::*;

    fn valuation(pairs: &[(&str, bool)]) -> Valuation {
        pairs
            .iter()
            .map(|(name, value)| (Atom::from(*name), *value))
            .collect()
    }

    #[test]
    fn enumerate_counts() {
        let atoms = ["a", "b", "c"].map(Atom::from);
        let all = Valuation::enumerate(&atoms);
        assert_eq!(all.len(), 8);
        assert_eq!(all.iter().collect::<BTreeSet<_>>().len(), 8);

        assert_eq!(
            Valuation::enumerate(Vec::<&Atom>::new()),
            vec![Valuation::default()]
        );
    }

    #[test]
    fn hamming_same_domain() {
        let v = valuation(&[("p", true), ("q", true), ("r", false)]);
        let w = valuation(&[("p", false), ("q", true), ("r", true)]);
        assert_eq!(v.hamming_distance(&w), 2);
        assert_eq!(w.hamming_distance(&v), 2);
        assert_eq!(v.hamming_distance(&v), 0);
    }

    #[test]
    fn hamming_mismatched_domains() {
        let v = valuation(&[("p", true), ("q", true)]);
        let w = valuation(&[("q", false), ("r", true)]);

        // Only q is shared.
        assert_eq!(v.hamming_distance(&w), 1);
        assert_eq!(v.hamming_distance(&Valuation::default()), 0);
    }
}
