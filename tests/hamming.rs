use belief_revisor::{
    comparator::ComparatorKind,
    revision::{BeliefRevision, ComparatorRevision},
    structures::{
        atom::Atom, belief_state::BeliefState, proposition::Proposition, valuation::Valuation,
    },
};

fn parse(text: &str) -> Proposition {
    text.parse().expect("parse failure")
}

fn revise(belief_state: &BeliefState, sentence: &str) -> BeliefState {
    ComparatorRevision::new(ComparatorKind::Hamming).revise(belief_state, &parse(sentence))
}

mod hamming_revision {
    use super::*;

    #[test]
    fn consistent_sentence_is_conjoined() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let revised = revise(&belief_state, "q or r");

        assert_eq!(revised.models(), parse("p and q and (q or r)").models());
    }

    #[test]
    fn negated_belief_is_minimal_change() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let revised = revise(&belief_state, "-(p and q)");

        assert_eq!(revised.models(), parse("p xor q").models());
    }

    #[test]
    fn ties_are_kept() {
        let belief_state = BeliefState::from([parse("p")]);
        let revised = revise(&belief_state, "-p and (q or r)");

        assert_eq!(revised.len(), 1);
        assert_eq!(revised.models().len(), 3);
        assert_eq!(revised.models(), parse("-p and (q or r)").models());
    }

    #[test]
    fn unconstrained_atoms_are_kept() {
        // r is absent from the sentence, and so keeps the value given by the belief state.
        let belief_state = BeliefState::from([parse("p and r")]);
        let revised = revise(&belief_state, "-p");

        assert_eq!(revised.models(), parse("-p and r").models());
    }

    #[test]
    fn unsatisfiable_sentence() {
        let belief_state = BeliefState::from([parse("p")]);
        let revised = revise(&belief_state, "q and -q");

        assert_eq!(revised, BeliefState::from([Proposition::Bottom]));
        assert!(!revised.is_consistent());
    }

    #[test]
    fn vacuous_belief_state() {
        let revised = revise(&BeliefState::default(), "p or q");

        assert_eq!(revised.models(), parse("p or q").models());
    }

    #[test]
    fn inconsistent_belief_state() {
        let belief_state = BeliefState::from([parse("p"), parse("-p")]);
        let revised = revise(&belief_state, "q");

        // Without models of the belief state, every candidate is tied.
        assert_eq!(revised.models(), parse("q and (p or -p)").models());
    }

    #[test]
    fn ranks_are_cached() {
        let belief_state = BeliefState::from([parse("p and q")]);
        let mut comparator = ComparatorKind::Hamming.comparator(&belief_state);

        let valuation = Valuation::from_iter([(Atom::from("p"), false), (Atom::from("q"), false)]);

        assert_eq!(comparator.rank(&valuation), 2);
        assert_eq!(comparator.rank(&valuation), 2);
        assert_eq!(comparator.cached_count(), 1);
    }
}
