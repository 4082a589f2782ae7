/*!
The context --- within which a belief state is revised by a sentence, following some configuration.

A revision within a context passes through two stages:
1. The sentence is revised by the [sentence revision](crate::trust) of the configuration, given the belief state.
2. The belief state is revised by the revised sentence, with a [comparator revision](ComparatorRevision) of the configuration.

The result is returned as a [Report], with a contradictory revision reported as [Inconsistent](Report::Inconsistent).

A fresh sentence revision and comparator are built for each revision, and so a context holds no state beyond its configuration.

# Example
```rust
# use belief_revisor::comparator::ComparatorKind;
# use belief_revisor::config::Config;
# use belief_revisor::context::Context;
# use belief_revisor::reports::Report;
# use belief_revisor::structures::belief_state::BeliefState;
# use belief_revisor::structures::proposition::Proposition;
let the_context = Context::from_config(Config::default());

let belief_state = BeliefState::from(["p and q".parse().unwrap()]);
let sentence: Proposition = "-p".parse().unwrap();

let expected: Proposition = "-p and q".parse().unwrap();
match the_context.revise(&belief_state, &sentence) {
    Ok(Report::Revised(revised)) => assert_eq!(revised.models(), expected.models()),
    _ => panic!("expected a revision"),
}

let contradiction: Proposition = "p and -p".parse().unwrap();
assert_eq!(the_context.revise(&belief_state, &contradiction), Ok(Report::Inconsistent));
```
*/

use crate::{
    config::Config,
    misc::log::targets::{self},
    reports::Report,
    revision::{BeliefRevision, ComparatorRevision},
    structures::{belief_state::BeliefState, proposition::Proposition},
    types::err::{self},
};

/// A configured reviser.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Revises the belief state by the sentence, following the configuration of the context.
    ///
    /// An error is returned only if the configuration is invalid.
    pub fn revise(
        &self,
        belief_state: &BeliefState,
        sentence: &Proposition,
    ) -> Result<Report, err::ErrorKind> {
        let sentence_revision = self.config.trust.sentence_revision(belief_state)?;
        let revised_sentence = sentence_revision.revise(sentence);

        log::info!(target: targets::REVISION, "Sentence {sentence} revised to {revised_sentence} with {} trust", self.config.trust);

        let revision = ComparatorRevision::new(self.config.comparator.clone());
        let revised = revision.revise(belief_state, &revised_sentence);

        Ok(Report::from_belief_state(revised))
    }

    /// Revises the belief state by each sentence in turn, stopping at the first inconsistent revision.
    pub fn revise_iteratively<'a>(
        &self,
        belief_state: &BeliefState,
        sentences: impl IntoIterator<Item = &'a Proposition>,
    ) -> Result<Report, err::ErrorKind> {
        let mut current = belief_state.clone();
        for sentence in sentences {
            match self.revise(&current, sentence)? {
                Report::Revised(revised) => current = revised,
                Report::Inconsistent => return Ok(Report::Inconsistent),
            }
        }
        Ok(Report::Revised(current))
    }
}
