/*!
Propositions, aka. formulas of propositional logic.

A proposition is a tree whose leaves are [atoms](crate::structures::atom) or constants, and whose nodes are connectives.
Equality of propositions is structural: `p and q` and `q and p` are distinct propositions with the same models.

Propositions may be built directly, through the combinators on [Proposition], or by [parsing](crate::builder) some text.

```rust
# use belief_revisor::structures::proposition::Proposition;
let p = Proposition::atom("p");
let q = Proposition::atom("q");

let p_or_q = p.clone().or(q.clone());
assert_eq!(p_or_q.models().len(), 3);

let neither = p_or_q.negate().and(p);
assert!(!neither.is_satisfiable());
```

# Models

The models of a proposition are all the [valuations](crate::structures::valuation) of the atoms of the proposition on which the proposition is true.
In particular:
- [Top](Proposition::Top) has exactly one model, the empty valuation.
- [Bottom](Proposition::Bottom) has no models.

Models are found by truth table.
*/

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    valuation::{Models, Valuation},
};

/// A formula of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Proposition {
    /// The tautology, true on every valuation.
    Top,

    /// The contradiction, false on every valuation.
    Bottom,

    Atom(Atom),

    Not(Box<Proposition>),

    /// The conjunction of some propositions, true exactly when each conjunct is true.
    /// The empty conjunction is a tautology.
    And(Vec<Proposition>),

    /// The disjunction of some propositions, true exactly when some disjunct is true.
    /// The empty disjunction is a contradiction.
    Or(Vec<Proposition>),

    /// Material implication, from antecedent to consequent.
    Implies(Box<Proposition>, Box<Proposition>),

    Iff(Box<Proposition>, Box<Proposition>),

    Xor(Box<Proposition>, Box<Proposition>),
}

impl Proposition {
    /// The proposition made of a single atom with the given name.
    pub fn atom(name: &str) -> Self {
        Proposition::Atom(Atom::from(name))
    }

    pub fn negate(self) -> Self {
        Proposition::Not(Box::new(self))
    }

    pub fn and(self, other: Proposition) -> Self {
        Proposition::And(vec![self, other])
    }

    pub fn or(self, other: Proposition) -> Self {
        Proposition::Or(vec![self, other])
    }

    pub fn implies(self, other: Proposition) -> Self {
        Proposition::Implies(Box::new(self), Box::new(other))
    }

    pub fn iff(self, other: Proposition) -> Self {
        Proposition::Iff(Box::new(self), Box::new(other))
    }

    pub fn xor(self, other: Proposition) -> Self {
        Proposition::Xor(Box::new(self), Box::new(other))
    }

    /// The conjunction of the given propositions.
    ///
    /// No conjuncts gives [Top](Proposition::Top), and a single conjunct is returned as is.
    pub fn conjunction(propositions: impl IntoIterator<Item = Proposition>) -> Self {
        let mut conjuncts = propositions.into_iter().collect::<Vec<_>>();
        match conjuncts.len() {
            0 => Proposition::Top,
            1 => conjuncts.swap_remove(0),
            _ => Proposition::And(conjuncts),
        }
    }

    /// The disjunction of the given propositions.
    ///
    /// No disjuncts gives [Bottom](Proposition::Bottom), and a single disjunct is returned as is.
    pub fn disjunction(propositions: impl IntoIterator<Item = Proposition>) -> Self {
        let mut disjuncts = propositions.into_iter().collect::<Vec<_>>();
        match disjuncts.len() {
            0 => Proposition::Bottom,
            1 => disjuncts.swap_remove(0),
            _ => Proposition::Or(disjuncts),
        }
    }

    /// The characteristic proposition of a valuation: the conjunction of the literals the valuation makes true.
    ///
    /// The valuation is the unique model of the proposition.
    pub fn from_valuation(valuation: &Valuation) -> Self {
        Proposition::conjunction(valuation.literals().map(|literal| literal.as_proposition()))
    }

    /// The atoms which occur in the proposition.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Proposition::Top | Proposition::Bottom => {}

            Proposition::Atom(atom) => {
                atoms.insert(atom.clone());
            }

            Proposition::Not(p) => p.collect_atoms(atoms),

            Proposition::And(ps) | Proposition::Or(ps) => {
                for p in ps {
                    p.collect_atoms(atoms)
                }
            }

            Proposition::Implies(p, q) | Proposition::Iff(p, q) | Proposition::Xor(p, q) => {
                p.collect_atoms(atoms);
                q.collect_atoms(atoms);
            }
        }
    }

    /// The value of the proposition on a valuation, if the valuation determines a value.
    ///
    /// Evaluation is three-valued, with an atom outside the valuation having no value.
    /// In the three-valued logic a conjunction with some false conjunct is false, and a disjunction with some true disjunct is true, regardless of any other value.
    pub fn evaluate(&self, valuation: &Valuation) -> Option<bool> {
        match self {
            Proposition::Top => Some(true),

            Proposition::Bottom => Some(false),

            Proposition::Atom(atom) => valuation.value_of(atom),

            Proposition::Not(p) => p.evaluate(valuation).map(|value| !value),

            Proposition::And(ps) => {
                let mut determined = true;
                for p in ps {
                    match p.evaluate(valuation) {
                        Some(false) => return Some(false),
                        Some(true) => {}
                        None => determined = false,
                    }
                }
                determined.then_some(true)
            }

            Proposition::Or(ps) => {
                let mut determined = true;
                for p in ps {
                    match p.evaluate(valuation) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => determined = false,
                    }
                }
                determined.then_some(false)
            }

            Proposition::Implies(p, q) => match (p.evaluate(valuation), q.evaluate(valuation)) {
                (Some(false), _) | (_, Some(true)) => Some(true),
                (Some(true), Some(false)) => Some(false),
                _ => None,
            },

            Proposition::Iff(p, q) => match (p.evaluate(valuation), q.evaluate(valuation)) {
                (Some(a), Some(b)) => Some(a == b),
                _ => None,
            },

            Proposition::Xor(p, q) => match (p.evaluate(valuation), q.evaluate(valuation)) {
                (Some(a), Some(b)) => Some(a != b),
                _ => None,
            },
        }
    }

    /// Whether the proposition is true on every extension of the valuation to the atoms of the proposition.
    ///
    /// On a valuation which includes every atom of the proposition this is the same as evaluation to true.
    pub fn is_true_on(&self, valuation: &Valuation) -> bool {
        match self.evaluate(valuation) {
            Some(value) => value,

            None => {
                let missing = self
                    .atoms()
                    .into_iter()
                    .filter(|atom| valuation.value_of(atom).is_none())
                    .collect::<Vec<_>>();

                Valuation::enumerate(&missing).iter().all(|extension| {
                    let mut extended = valuation.clone();
                    for (atom, value) in extension.atom_value_pairs() {
                        extended.set_value(atom.clone(), value);
                    }
                    self.evaluate(&extended) == Some(true)
                })
            }
        }
    }

    /// All models of the proposition, over exactly the atoms of the proposition.
    pub fn models(&self) -> Models {
        Valuation::enumerate(&self.atoms())
            .into_iter()
            .filter(|valuation| self.evaluate(valuation) == Some(true))
            .collect()
    }

    /// Whether the proposition has some model.
    pub fn is_satisfiable(&self) -> bool {
        Valuation::enumerate(&self.atoms())
            .iter()
            .any(|valuation| self.evaluate(valuation) == Some(true))
    }

    /// The binding strength of the outermost connective, as used by the parser.
    /// Higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Proposition::Iff(_, _) => 1,
            Proposition::Implies(_, _) => 2,
            Proposition::Or(ps) if ps.len() > 1 => 3,
            Proposition::Xor(_, _) => 3,
            Proposition::And(ps) if ps.len() > 1 => 4,
            Proposition::Not(_) => 5,
            Proposition::Or(ps) | Proposition::And(ps) if ps.len() == 1 => ps[0].precedence(),
            _ => 6,
        }
    }

    /// Writes the proposition, wrapped in parentheses if it binds no tighter than `bound`.
    fn write_bounded(&self, f: &mut std::fmt::Formatter<'_>, bound: u8) -> std::fmt::Result {
        match self.precedence() <= bound {
            true => write!(f, "({self})"),
            false => write!(f, "{self}"),
        }
    }

    fn write_joined(
        f: &mut std::fmt::Formatter<'_>,
        ps: &[Proposition],
        connective: &str,
        bound: u8,
    ) -> std::fmt::Result {
        for (index, p) in ps.iter().enumerate() {
            if index > 0 {
                write!(f, " {connective} ")?;
            }
            p.write_bounded(f, bound)?;
        }
        Ok(())
    }
}

impl From<Atom> for Proposition {
    fn from(atom: Atom) -> Self {
        Proposition::Atom(atom)
    }
}

/// Writes the proposition in the syntax accepted by the [parser](crate::builder).
///
/// The written text parses to a proposition with the same models, though not necessarily to the same structure.
impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Proposition::Top => write!(f, "1"),

            Proposition::Bottom => write!(f, "0"),

            Proposition::Atom(atom) => write!(f, "{atom}"),

            Proposition::Not(p) => {
                write!(f, "-")?;
                p.write_bounded(f, 4)
            }

            Proposition::And(ps) if ps.is_empty() => write!(f, "1"),

            Proposition::Or(ps) if ps.is_empty() => write!(f, "0"),

            Proposition::And(ps) => Proposition::write_joined(f, ps, "and", 4),

            Proposition::Or(ps) => Proposition::write_joined(f, ps, "or", 3),

            // Binary connectives are left associative, so only the right operand needs parentheses at equal precedence.
            Proposition::Implies(p, q) => {
                p.write_bounded(f, 1)?;
                write!(f, " then ")?;
                q.write_bounded(f, 2)
            }

            Proposition::Iff(p, q) => {
                p.write_bounded(f, 0)?;
                write!(f, " iff ")?;
                q.write_bounded(f, 1)
            }

            Proposition::Xor(p, q) => {
                p.write_bounded(f, 2)?;
                write!(f, " xor ")?;
                q.write_bounded(f, 3)
            }
        }
    }
}
