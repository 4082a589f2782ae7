//! Literals are atoms paired with a (boolean) polarity.
//!
//! Literals are the building blocks of [normal forms](crate::structures::normal_form) and of the characteristic sentence of a [valuation](crate::structures::valuation).
//!
//! ```rust
//! # use belief_revisor::structures::literal::Literal;
//! # use belief_revisor::structures::atom::Atom;
//! let literal = Literal::new(Atom::from("p"), true);
//!
//! assert!(literal.polarity());
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate().to_string(), "-p");
//! ```

use crate::structures::{atom::Atom, proposition::Proposition};

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal as a proposition, either an atom or a negated atom.
    pub fn as_proposition(&self) -> Proposition {
        match self.polarity {
            true => Proposition::Atom(self.atom.clone()),
            false => Proposition::Not(Box::new(Proposition::Atom(self.atom.clone()))),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

// Literals are ordered by atom and then polarity, with false before true.

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}
