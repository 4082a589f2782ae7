//! Key structures, such as atoms, valuations, and propositions.
//!
//! These structures stand in for a small propositional logic library: enough to build formulas, enumerate their models, and test satisfiability.
//!
//! # Languages
//!
//! A *language* 𝓛 is some set of [atoms](atom), closed under the operations of negation, conjunction, and disjunction. \
//! Every proposition is expressed in some language, and the language of a proposition is taken to be the atoms which occur in it.
//!
//! In particular, the [models](proposition::Proposition::models) of a proposition are [valuations](valuation) over exactly the atoms of the proposition.
//! To enumerate models over some larger language, conjoin a tautology mentioning the additional atoms (e.g. `a or -a`).
//!
//! # Belief states
//!
//! A [belief state](belief_state) is a finite set of propositions, interpreted as the conjunction of those propositions.
//! The empty belief state is interpreted as a tautology.
//!
//! # Cost
//!
//! Model enumeration is by truth table, and so is exponential in the number of atoms.

pub mod atom;
pub mod belief_state;
pub mod literal;
pub mod normal_form;
pub mod proposition;
pub mod valuation;
