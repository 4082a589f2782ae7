/*!
Reports for the context, and ways to display a revised belief state.
*/

use crate::structures::{belief_state::BeliefState, proposition::Proposition};

/// High-level reports regarding a revision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// The revision is consistent, with the revised belief state.
    Revised(BeliefState),

    /// The revision is a contradiction, and so there is no consistent revision.
    Inconsistent,
}

impl Report {
    /// A report on a revised belief state, distinguishing a contradictory belief state.
    pub fn from_belief_state(belief_state: BeliefState) -> Self {
        match belief_state.is_consistent() {
            true => Self::Revised(belief_state),
            false => Self::Inconsistent,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revised(_) => write!(f, "REVISED"),
            Self::Inconsistent => write!(f, "INCONSISTENT"),
        }
    }
}

/// Ways to display a belief state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Each proposition, as given.
    #[default]
    Default,

    /// The characteristic proposition of each model of the belief state.
    Models,

    /// Each proposition, in conjunctive normal form.
    Cnf,

    /// Each proposition, as the disjunction of the characteristic propositions of its models.
    FullDnf,
}

impl DisplayMode {
    pub const NAMES: [&'static str; 4] = ["default", "models", "cnf", "full-dnf"];

    /// The propositions to display for the belief state.
    pub fn apply(&self, belief_state: &BeliefState) -> Vec<Proposition> {
        match self {
            Self::Default => belief_state.iter().cloned().collect(),

            Self::Models => belief_state
                .models()
                .iter()
                .map(Proposition::from_valuation)
                .collect(),

            Self::Cnf => belief_state.iter().map(|p| p.to_cnf()).collect(),

            Self::FullDnf => belief_state.iter().map(|p| p.to_full_dnf()).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => Self::NAMES[0],
            Self::Models => Self::NAMES[1],
            Self::Cnf => Self::NAMES[2],
            Self::FullDnf => Self::NAMES[3],
        }
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = crate::types::err::ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "default" => Ok(Self::Default),
            "models" => Ok(Self::Models),
            "cnf" => Ok(Self::Cnf),
            "full-dnf" => Ok(Self::FullDnf),
            _ => Err(crate::types::err::ConfigurationError::UnknownStrategy(
                name.to_string(),
            )),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    fn parse(text: &str) -> Proposition {
        text.parse().expect("parse failure")
    }

    #[test]
    fn contradiction_is_inconsistent() {
        let contradiction = BeliefState::from([Proposition::Bottom]);
        assert_eq!(Report::from_belief_state(contradiction), Report::Inconsistent);

        let vacuous = BeliefState::default();
        assert_eq!(
            Report::from_belief_state(vacuous.clone()),
            Report::Revised(vacuous)
        );
    }

    #[test]
    fn display_models() {
        let belief_state = BeliefState::from([parse("p xor q")]);
        let models = DisplayMode::Models.apply(&belief_state);
        assert_eq!(models, vec![parse("-p and q"), parse("p and -q")]);

        assert!(DisplayMode::Models
            .apply(&BeliefState::from([Proposition::Bottom]))
            .is_empty());
    }

    #[test]
    fn display_cnf() {
        let belief_state = BeliefState::from([parse("p iff q")]);
        let cnf = DisplayMode::Cnf.apply(&belief_state);
        assert_eq!(cnf.len(), 1);
        assert_eq!(cnf[0].models(), parse("p iff q").models());
    }
}
