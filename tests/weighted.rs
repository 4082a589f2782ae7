use belief_revisor::{
    comparator::{ComparatorKind, Weights},
    revision::{BeliefRevision, ComparatorRevision},
    structures::{atom::Atom, belief_state::BeliefState, proposition::Proposition},
    types::err,
};

fn parse(text: &str) -> Proposition {
    text.parse().expect("parse failure")
}

fn weighted(entries: &[&str]) -> ComparatorRevision {
    let weights = Weights::from_entries(entries.iter().copied()).expect("weight failure");
    ComparatorRevision::new(ComparatorKind::WeightedHamming(weights))
}

mod weighted_revision {
    use super::*;

    #[test]
    fn unit_weights_are_hamming() {
        let belief_state = BeliefState::from([parse("p and q and r")]);

        for sentence in ["-(p and q)", "-p or -r", "p xor (q iff r)", "-p and -q"] {
            let sentence = parse(sentence);
            let by_weight = weighted(&["p = 1", "q = 1", "r = 1"]).revise(&belief_state, &sentence);
            let by_count =
                ComparatorRevision::new(ComparatorKind::Hamming).revise(&belief_state, &sentence);

            assert_eq!(by_weight.models(), by_count.models(), "{sentence}");
        }
    }

    #[test]
    fn heavy_atoms_are_kept() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let revised = weighted(&["p = 5", "q = 1"]).revise(&belief_state, &parse("-(p and q)"));

        assert_eq!(revised.models(), parse("p and -q").models());
    }

    #[test]
    fn zero_weights_tie_everything() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let revised = weighted(&[]).revise(&belief_state, &parse("-(p and q)"));

        assert_eq!(revised.models(), parse("-(p and q)").models());

        let revised = weighted(&["p = 0", "q = 0"]).revise(&belief_state, &parse("-(p and q)"));
        assert_eq!(revised.models(), parse("-(p and q)").models());
    }

    #[test]
    fn configuration_errors() {
        assert_eq!(
            Weights::from_entries(["a = -1"]),
            Err(err::ConfigurationError::MalformedWeight("a = -1".to_string()))
        );

        assert_eq!(
            Weights::from_entries(["a = 1", "A = 2"]),
            Err(err::ConfigurationError::DuplicateWeight(Atom::from("a")))
        );
    }
}
