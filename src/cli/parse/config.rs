use clap::ArgMatches;
use rand::{rngs::StdRng, SeedableRng};

use belief_revisor::{
    builder::belief_state_from,
    comparator::{random_ordering, ComparatorKind, Weights},
    config::Config,
    reports::DisplayMode,
    structures::{atom::Atom, belief_state::BeliefState, proposition::Proposition},
    trust::TrustKind,
    types::err::{self},
};

/// Strings given to an argument, in the order given.
fn strings<'a>(args: &'a ArgMatches, id: &str) -> Vec<&'a str> {
    match args.try_get_many::<String>(id) {
        Ok(Some(values)) => values.map(|value| value.as_str()).collect(),
        _ => Vec::default(),
    }
}

fn propositions(args: &ArgMatches, id: &str) -> Result<Vec<Proposition>, err::ParseError> {
    strings(args, id)
        .into_iter()
        .map(|sentence| sentence.parse::<Proposition>())
        .collect()
}

/// An atom from text, which must parse to exactly an atom.
fn atom(name: &str) -> Result<Atom, err::ParseError> {
    match name.parse::<Proposition>()? {
        Proposition::Atom(atom) => Ok(atom),
        _ => Err(err::ParseError::UnexpectedToken(name.to_string())),
    }
}

fn atoms(args: &ArgMatches, id: &str) -> Result<Vec<Atom>, err::ParseError> {
    strings(args, id).into_iter().map(atom).collect()
}

/// An error if an option given is of no use to the strategy chosen.
fn inapplicable(args: &ArgMatches, ids: &[&str]) -> Result<(), err::ConfigurationError> {
    match ids.iter().find(|id| args.contains_id(id)) {
        Some(id) => Err(err::ConfigurationError::InapplicableOption(
            id.replace('_', "-"),
        )),
        None => Ok(()),
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ErrorKind> {
    let mut the_config = Config::default();

    if let Ok(Some(buckets)) = args.try_get_one::<usize>("buckets") {
        if !the_config.buckets.set(*buckets) {
            return Err(err::ConfigurationError::NoBuckets.into());
        }
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed.set(*seed);
    };

    if let Ok(Some(name)) = args.try_get_one::<String>("ordering") {
        the_config.comparator = match name.as_str() {
            "hamming" => {
                inapplicable(args, &["weight", "bias", "rank"])?;
                ComparatorKind::Hamming
            }

            "weighted" => {
                inapplicable(args, &["bias", "rank"])?;
                ComparatorKind::WeightedHamming(Weights::from_entries(strings(args, "weight"))?)
            }

            "set-inclusion" => {
                inapplicable(args, &["weight", "rank"])?;
                let biases = propositions(args, "bias")?;
                match biases.is_empty() {
                    true => ComparatorKind::SetInclusion(None),
                    false => ComparatorKind::SetInclusion(Some(biases)),
                }
            }

            "ordered-sets" => {
                inapplicable(args, &["weight", "bias"])?;
                ComparatorKind::OrderedSets(propositions(args, "rank")?)
            }

            _ => return Err(err::ConfigurationError::UnknownStrategy(name.clone()).into()),
        }
    };

    // Exclusive of any other ordering.
    let random_atoms = atoms(args, "random_ranks")?;
    if !random_atoms.is_empty() {
        let mut rng = StdRng::seed_from_u64(the_config.seed.value);
        let ranks = random_ordering(&random_atoms, the_config.buckets.value, &mut rng)?;
        the_config.comparator = ComparatorKind::OrderedSets(ranks);
    }

    if let Ok(Some(name)) = args.try_get_one::<String>("trust") {
        the_config.trust = match name.as_str() {
            "complete" => {
                inapplicable(args, &["partition", "trust_atom"])?;
                TrustKind::Complete
            }

            "none" => {
                inapplicable(args, &["partition", "trust_atom"])?;
                TrustKind::None
            }

            "atoms" => {
                inapplicable(args, &["partition"])?;
                TrustKind::Atoms(atoms(args, "trust_atom")?.into_iter().collect())
            }

            "sentences" => {
                inapplicable(args, &["trust_atom"])?;
                TrustKind::Sentences(propositions(args, "partition")?)
            }

            _ => return Err(err::ConfigurationError::UnknownStrategy(name.clone()).into()),
        }
    };

    if let Ok(Some(name)) = args.try_get_one::<String>("display") {
        the_config.display = name.parse::<DisplayMode>()?;
    };

    Ok(the_config)
}

/// The belief state and sentence to revise by.
pub fn input_from_args(args: &ArgMatches) -> Result<(BeliefState, Proposition), err::ErrorKind> {
    let belief_state = belief_state_from(strings(args, "belief"))?;

    let sentence = match args.try_get_one::<String>("sentence") {
        Ok(Some(sentence)) => sentence.parse::<Proposition>()?,
        _ => return Err(err::ParseError::Empty.into()),
    };

    Ok((belief_state, sentence))
}

#[cfg(test)]
mod config_tests {
    use super::*;

    use crate::parse::cli::cli;

    fn config(args: &[&str]) -> Result<Config, err::ErrorKind> {
        let matches = cli()
            .try_get_matches_from(args)
            .expect("argument failure");
        config_from_args(&matches)
    }

    #[test]
    fn ordering_follows_options() {
        let weighted = config(&["revisor_cli", "--weight", "p=5", "q"]).unwrap();
        let weights = Weights::from_entries(["p=5"]).unwrap();
        assert_eq!(weighted.comparator, ComparatorKind::WeightedHamming(weights));

        let ranked = config(&["revisor_cli", "--rank", "-p", "--rank", "q", "q"]).unwrap();
        assert_eq!(
            ranked.comparator,
            ComparatorKind::OrderedSets(vec!["-p".parse().unwrap(), "q".parse().unwrap()])
        );
    }

    #[test]
    fn trust_follows_options() {
        let partitioned =
            config(&["revisor_cli", "--partition", "a", "--partition", "-a", "q"]).unwrap();
        assert_eq!(
            partitioned.trust,
            TrustKind::Sentences(vec!["a".parse().unwrap(), "-a".parse().unwrap()])
        );

        let atoms = config(&["revisor_cli", "--trust-atom", "a,b", "q"]).unwrap();
        assert_eq!(
            atoms.trust,
            TrustKind::Atoms([Atom::from("a"), Atom::from("b")].into_iter().collect())
        );
    }

    #[test]
    fn inapplicable_options() {
        assert_eq!(
            config(&["revisor_cli", "--ordering", "hamming", "--weight", "p=1", "q"]),
            Err(err::ConfigurationError::InapplicableOption("weight".to_string()).into())
        );

        assert_eq!(
            config(&["revisor_cli", "--trust", "none", "--trust-atom", "a", "q"]),
            Err(err::ConfigurationError::InapplicableOption("trust-atom".to_string()).into())
        );
    }

    #[test]
    fn conflicting_options() {
        for args in [
            vec!["revisor_cli", "--weight", "p=1", "--bias", "p", "q"],
            vec!["revisor_cli", "--random-ranks", "a,b", "--ordering", "hamming", "q"],
            vec!["revisor_cli", "--random-ranks", "a", "--rank", "a", "q"],
            vec!["revisor_cli", "--partition", "a", "--trust-atom", "a", "q"],
            vec!["revisor_cli", "--seed", "3", "q"],
        ] {
            assert!(cli().try_get_matches_from(&args).is_err(), "{args:?}");
        }
    }

    #[test]
    fn seeded_random_ranks() {
        let random = config(&[
            "revisor_cli",
            "--random-ranks",
            "a,b",
            "--buckets",
            "2",
            "--seed",
            "5",
            "q",
        ])
        .unwrap();

        let atoms = [Atom::from("a"), Atom::from("b")];
        let ranks = random_ordering(&atoms, 2, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(random.comparator, ComparatorKind::OrderedSets(ranks));
        assert_eq!(random.buckets.value, 2);
    }

    #[test]
    fn input() {
        let matches = cli()
            .try_get_matches_from(["revisor_cli", "-b", "-p", "-b", "q", "--", "-q"])
            .expect("argument failure");
        let (belief_state, sentence) = input_from_args(&matches).unwrap();

        assert_eq!(belief_state, belief_state_from(["-p", "q"]).unwrap());
        assert_eq!(sentence, "-q".parse::<Proposition>().unwrap());
    }
}
