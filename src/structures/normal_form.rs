/*!
Normal forms of propositions.

- Negation normal form (NNF), where the only connectives are conjunction, disjunction, and negation, and negation is applied only to atoms.
- Conjunctive normal form (CNF), a conjunction of clauses, where a clause is a disjunction of literals.
- Disjunctive normal form (DNF), a disjunction of terms, where a term is a conjunction of literals.
- Full disjunctive normal form, the disjunction of the characteristic propositions of each model.

CNF and DNF are found by distribution over NNF, and so may be exponentially larger than the proposition they are found from.
Clauses which are tautologies and terms which are contradictions are dropped, as are duplicates.

```rust
# use belief_revisor::structures::proposition::Proposition;
let formula: Proposition = "p iff q".parse().unwrap();
let cnf = formula.to_cnf();

assert_eq!(cnf.models(), formula.models());
assert_eq!(cnf.to_string(), "(-p or q) and (p or -q)");
```
*/

use std::collections::BTreeSet;

use crate::structures::{literal::Literal, proposition::Proposition};

/// A set of literals, read as either a clause or a term depending on context.
pub type LiteralSet = BTreeSet<Literal>;

impl Proposition {
    /// The proposition in negation normal form.
    pub fn to_nnf(&self) -> Proposition {
        match self {
            Proposition::Top | Proposition::Bottom | Proposition::Atom(_) => self.clone(),

            Proposition::Not(p) => p.negated_nnf(),

            Proposition::And(ps) => Proposition::And(ps.iter().map(|p| p.to_nnf()).collect()),

            Proposition::Or(ps) => Proposition::Or(ps.iter().map(|p| p.to_nnf()).collect()),

            Proposition::Implies(p, q) => Proposition::Or(vec![p.negated_nnf(), q.to_nnf()]),

            Proposition::Iff(p, q) => Proposition::Or(vec![
                Proposition::And(vec![p.to_nnf(), q.to_nnf()]),
                Proposition::And(vec![p.negated_nnf(), q.negated_nnf()]),
            ]),

            Proposition::Xor(p, q) => Proposition::Or(vec![
                Proposition::And(vec![p.to_nnf(), q.negated_nnf()]),
                Proposition::And(vec![p.negated_nnf(), q.to_nnf()]),
            ]),
        }
    }

    /// The negation of the proposition, in negation normal form.
    fn negated_nnf(&self) -> Proposition {
        match self {
            Proposition::Top => Proposition::Bottom,

            Proposition::Bottom => Proposition::Top,

            Proposition::Atom(_) => self.clone().negate(),

            Proposition::Not(p) => p.to_nnf(),

            Proposition::And(ps) => Proposition::Or(ps.iter().map(|p| p.negated_nnf()).collect()),

            Proposition::Or(ps) => Proposition::And(ps.iter().map(|p| p.negated_nnf()).collect()),

            Proposition::Implies(p, q) => Proposition::And(vec![p.to_nnf(), q.negated_nnf()]),

            Proposition::Iff(p, q) => Proposition::Or(vec![
                Proposition::And(vec![p.to_nnf(), q.negated_nnf()]),
                Proposition::And(vec![p.negated_nnf(), q.to_nnf()]),
            ]),

            Proposition::Xor(p, q) => Proposition::Or(vec![
                Proposition::And(vec![p.to_nnf(), q.to_nnf()]),
                Proposition::And(vec![p.negated_nnf(), q.negated_nnf()]),
            ]),
        }
    }

    /// The clauses of the proposition in conjunctive normal form.
    ///
    /// No clauses is a tautology, and a clause with no literals is a contradiction.
    pub fn clauses(&self) -> BTreeSet<LiteralSet> {
        nnf_clauses(&self.to_nnf())
    }

    /// The terms of the proposition in disjunctive normal form.
    ///
    /// No terms is a contradiction, and a term with no literals is a tautology.
    pub fn terms(&self) -> BTreeSet<LiteralSet> {
        nnf_terms(&self.to_nnf())
    }

    /// The proposition in conjunctive normal form.
    pub fn to_cnf(&self) -> Proposition {
        Proposition::conjunction(self.clauses().into_iter().map(|clause| {
            Proposition::disjunction(clause.iter().map(|literal| literal.as_proposition()))
        }))
    }

    /// The proposition in disjunctive normal form.
    pub fn to_dnf(&self) -> Proposition {
        Proposition::disjunction(self.terms().into_iter().map(|term| {
            Proposition::conjunction(term.iter().map(|literal| literal.as_proposition()))
        }))
    }

    /// The disjunction of the characteristic propositions of each model of the proposition.
    pub fn to_full_dnf(&self) -> Proposition {
        Proposition::disjunction(self.models().iter().map(Proposition::from_valuation))
    }
}

/// The literal of a proposition in NNF, if the proposition is a literal.
fn nnf_literal(nnf: &Proposition) -> Option<Literal> {
    match nnf {
        Proposition::Atom(atom) => Some(Literal::new(atom.clone(), true)),
        Proposition::Not(p) => match p.as_ref() {
            Proposition::Atom(atom) => Some(Literal::new(atom.clone(), false)),
            _ => None,
        },
        _ => None,
    }
}

/// Whether some atom appears with both polarities in the set.
fn complementary(literals: &LiteralSet) -> bool {
    literals
        .iter()
        .any(|literal| literal.polarity() && literals.contains(&literal.negate()))
}

/// Pairwise unions of two families of literal sets, skipping complementary unions.
fn product(left: &BTreeSet<LiteralSet>, right: &BTreeSet<LiteralSet>) -> BTreeSet<LiteralSet> {
    let mut combined = BTreeSet::default();
    for l in left {
        for r in right {
            let union = l.union(r).cloned().collect::<LiteralSet>();
            if !complementary(&union) {
                combined.insert(union);
            }
        }
    }
    combined
}

fn nnf_clauses(nnf: &Proposition) -> BTreeSet<LiteralSet> {
    if let Some(literal) = nnf_literal(nnf) {
        return BTreeSet::from([LiteralSet::from([literal])]);
    }

    match nnf {
        Proposition::Top => BTreeSet::default(),

        Proposition::Bottom => BTreeSet::from([LiteralSet::default()]),

        Proposition::And(ps) => ps.iter().flat_map(nnf_clauses).collect(),

        Proposition::Or(ps) => ps
            .iter()
            .fold(BTreeSet::from([LiteralSet::default()]), |acc, p| {
                product(&acc, &nnf_clauses(p))
            }),

        // Other connectives are not found in NNF.
        _ => nnf_clauses(&nnf.to_nnf()),
    }
}

fn nnf_terms(nnf: &Proposition) -> BTreeSet<LiteralSet> {
    if let Some(literal) = nnf_literal(nnf) {
        return BTreeSet::from([LiteralSet::from([literal])]);
    }

    match nnf {
        Proposition::Top => BTreeSet::from([LiteralSet::default()]),

        Proposition::Bottom => BTreeSet::default(),

        Proposition::Or(ps) => ps.iter().flat_map(nnf_terms).collect(),

        Proposition::And(ps) => ps
            .iter()
            .fold(BTreeSet::from([LiteralSet::default()]), |acc, p| {
                product(&acc, &nnf_terms(p))
            }),

        _ => nnf_terms(&nnf.to_nnf()),
    }
}
