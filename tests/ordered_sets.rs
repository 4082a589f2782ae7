use belief_revisor::{
    comparator::{random_ordering, ComparatorKind},
    revision::{BeliefRevision, ComparatorRevision},
    structures::{
        atom::Atom, belief_state::BeliefState, proposition::Proposition, valuation::Valuation,
    },
    types::err,
};

use rand::{rngs::StdRng, SeedableRng};

fn parse(text: &str) -> Proposition {
    text.parse().expect("parse failure")
}

mod ordered_sets_revision {
    use super::*;

    #[test]
    fn first_overlapping_rank() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let x = parse("p");
        let y = parse("-p and -q");
        let sentence = parse("-p");

        let revision = ComparatorRevision::new(ComparatorKind::OrderedSets(vec![x, y.clone()]));
        let revised = revision.revise(&belief_state, &sentence);

        assert_eq!(revised.models(), sentence.clone().and(y).models());

        // The rank, rather than distance, decides.
        let nearest = ComparatorRevision::new(ComparatorKind::Hamming).revise(&belief_state, &sentence);
        assert_eq!(nearest.models(), parse("-p and q").models());
        assert_ne!(revised.models(), nearest.models());
    }

    #[test]
    fn ranks_over_other_atoms() {
        // z is valued by no candidate, so a rank holds only if it holds for either value of z.
        let belief_state = BeliefState::from([parse("p")]);
        let sentence = parse("-p");

        let undetermined = vec![parse("q and z"), parse("-q")];
        let revised = ComparatorRevision::new(ComparatorKind::OrderedSets(undetermined))
            .revise(&belief_state, &sentence);
        assert_eq!(revised.models(), parse("-p and -q").models());

        let determined = vec![parse("q or z"), parse("-q")];
        let revised = ComparatorRevision::new(ComparatorKind::OrderedSets(determined))
            .revise(&belief_state, &sentence);
        assert_eq!(revised.models(), parse("-p and q").models());
    }

    #[test]
    fn belief_state_is_first() {
        let belief_state = BeliefState::from([parse("p or q")]);
        let revision = ComparatorRevision::new(ComparatorKind::OrderedSets(vec![parse("-p")]));
        let revised = revision.revise(&belief_state, &parse("-q"));

        assert_eq!(revised.models(), parse("p and -q").models());
    }

    #[test]
    fn catch_all_rank() {
        // No rank overlaps the sentence, and so every candidate is ranked last.
        let belief_state = BeliefState::from([parse("p")]);
        let revision = ComparatorRevision::new(ComparatorKind::OrderedSets(vec![parse("q")]));
        let revised = revision.revise(&belief_state, &parse("-p and -q"));

        assert_eq!(revised.models(), parse("-p and -q").models());
    }
}

mod random_orderings {
    use super::*;

    #[test]
    fn partition_of_valuations() {
        let atoms = [Atom::from("a"), Atom::from("b"), Atom::from("c")];
        let mut rng = StdRng::seed_from_u64(3);
        let ranks = random_ordering(&atoms, 4, &mut rng).expect("ordering failure");

        assert!(!ranks.is_empty() && ranks.len() <= 4);

        for valuation in Valuation::enumerate(&atoms) {
            let holding = ranks
                .iter()
                .filter(|rank| rank.is_true_on(&valuation))
                .count();
            assert_eq!(holding, 1, "{valuation}");
        }
    }

    #[test]
    fn seeded() {
        let atoms = [Atom::from("a"), Atom::from("b")];
        let first = random_ordering(&atoms, 3, &mut StdRng::seed_from_u64(11));
        let second = random_ordering(&atoms, 3, &mut StdRng::seed_from_u64(11));

        assert_eq!(first, second);
    }

    #[test]
    fn configuration_errors() {
        let atoms = [Atom::from("a")];
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            random_ordering(&atoms, 0, &mut rng),
            Err(err::ConfigurationError::NoBuckets)
        );
        assert_eq!(
            random_ordering(Vec::<&Atom>::new(), 2, &mut rng),
            Err(err::ConfigurationError::NoAtoms)
        );
    }
}
