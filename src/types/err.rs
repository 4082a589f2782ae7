//! Error types used in the library.
//!
//! - Configuration errors are raised when building some part of a revision, and never during a revision.
//! - Parse errors are raised when reading a proposition from text.
//!
//! Unsatisfiable input is not an error.
//! An unsatisfiable sentence revises a belief state to a contradiction, and this is returned as any other revision.
//!
//! Names of the error enums --- for the most part --- overlap with the corresponding structures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration(ConfigurationError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "Invalid configuration: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when configuring a revision.
///
/// These are raised on construction, and a configuration is never repaired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A trust partition revision was requested without any partitions.
    NoPartitions,

    /// A weight was not of the form `atom = weight`, with weight a non-negative integer.
    MalformedWeight(String),

    /// More than one weight was given to an atom.
    DuplicateWeight(Atom),

    /// A random ordering was requested with no buckets to order valuations into.
    NoBuckets,

    /// Some collection of atoms was required, though none were given.
    NoAtoms,

    /// An identifier for some strategy was not recognised.
    UnknownStrategy(String),

    /// An option was given which has no use with the strategy chosen.
    InapplicableOption(String),
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPartitions => write!(f, "at least one trust partition is required"),
            Self::MalformedWeight(entry) => write!(
                f,
                "the weight \"{entry}\" should be an atom and a non-negative integer, e.g. \"a = 5\""
            ),
            Self::DuplicateWeight(atom) => write!(f, "a weight for \"{atom}\" already exists"),
            Self::NoBuckets => write!(f, "at least one bucket is required"),
            Self::NoAtoms => write!(f, "at least one atom is required"),
            Self::UnknownStrategy(name) => write!(f, "unknown strategy \"{name}\""),
            Self::InapplicableOption(name) => {
                write!(f, "the option \"{name}\" does not apply to the strategy chosen")
            }
        }
    }
}

impl From<ConfigurationError> for ErrorKind {
    fn from(e: ConfigurationError) -> Self {
        ErrorKind::Configuration(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// Some token which is neither an operator, an operand, nor a parenthesis.
    UnrecognisedToken(String),

    /// A parenthesis without a partner.
    UnbalancedParenthesis,

    /// An operator without enough operands.
    MissingOperand(String),

    /// A token in a position it can't occupy, e.g. two operands in sequence.
    UnexpectedToken(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no sentence to parse"),
            Self::UnrecognisedToken(token) => write!(f, "unrecognised token: {token}"),
            Self::UnbalancedParenthesis => write!(f, "unbalanced parenthesis"),
            Self::MissingOperand(token) => write!(f, "missing operand for: {token}"),
            Self::UnexpectedToken(token) => write!(f, "unexpected token: {token}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
