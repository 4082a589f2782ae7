//! A library for AGM-style revision of belief states over propositional formulas.
//!
//! belief_revisor takes a belief state --- a finite set of sentences, read as their conjunction --- together with some new sentence, and returns a revised belief state.
//! The revision is made by minimal change: of the models of the new sentence, those ranked closest to the belief state are kept.
//!
//! belief_revisor is developed to help those experimenting with revision semantics, and so the way worlds are ranked is pluggable.
//!
//! # Orientation
//!
//! A revision passes through two stages:
//! - A [sentence revision](crate::trust) generalises the incoming sentence, modelling partial trust in its source.
//! - A [belief revision](crate::revision) then incorporates the generalised sentence into the belief state.
//!
//! The belief revision is parameterised by a [comparator], a total preorder on [valuations](crate::structures::valuation) built fresh for each belief state.
//! Ties in the preorder are meaningful, and every world tied for the least rank is kept.
//!
//! The two stages are bundled together, following some [configuration](crate::config), in a [context].
//!
//! Useful starting points, then, may be:
//! - The [revision procedure](crate::revision::ComparatorRevision) to inspect how minimal models are selected.
//! - The [comparators](crate::comparator) to see which rankings of worlds are supported.
//! - The [structures] to familiarise yourself with the representation of formulas and worlds.
//!
//! # Examples
//!
//! + Revise a belief in `p and q` by the negation of that belief.
//!
//! ```rust
//! # use belief_revisor::revision::{BeliefRevision, ComparatorRevision};
//! # use belief_revisor::comparator::ComparatorKind;
//! # use belief_revisor::structures::proposition::Proposition;
//! # use belief_revisor::structures::belief_state::BeliefState;
//! let p_and_q: Proposition = "p and q".parse().unwrap();
//! let belief_state = BeliefState::from([p_and_q.clone()]);
//!
//! let revision = ComparatorRevision::new(ComparatorKind::Hamming);
//! let revised = revision.revise(&belief_state, &p_and_q.negate());
//!
//! let expected: Proposition = "p xor q".parse().unwrap();
//! assert_eq!(revised.models(), expected.models());
//! ```
//!
//! + Revise through a configured context, with some trust partitions.
//!
//! ```rust
//! # use belief_revisor::config::Config;
//! # use belief_revisor::context::Context;
//! # use belief_revisor::reports::Report;
//! # use belief_revisor::structures::belief_state::BeliefState;
//! # use belief_revisor::trust::TrustKind;
//! let mut config = Config::default();
//! config.trust = TrustKind::Sentences(vec!["a".parse().unwrap(), "-a".parse().unwrap()]);
//!
//! let the_context = Context::from_config(config);
//! let belief_state = BeliefState::from(["-a and b".parse().unwrap()]);
//!
//! let report = the_context.revise(&belief_state, &"a and -b".parse().unwrap());
//! assert!(matches!(report, Ok(Report::Revised(_))));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made during revision, and targets are defined to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the [revision procedure](crate::revision) can be filtered with `RUST_LOG=revision …` or,
//! - Ranks given to each world can be found with `RUST_LOG=comparator=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;

pub mod comparator;
pub mod config;
pub mod context;
pub mod reports;
pub mod revision;
pub mod structures;
pub mod trust;
pub mod types;

pub mod misc;
