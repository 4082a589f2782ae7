use belief_revisor::{
    structures::{atom::Atom, proposition::Proposition},
    trust::{SentenceRevision, TrustPartitionRevision},
    types::err,
};

fn parse(text: &str) -> Proposition {
    text.parse().expect("parse failure")
}

mod trust_partitions {
    use super::*;

    #[test]
    fn overlapping_partition_only() {
        let a = parse("a");
        let b = parse("-a and b");
        let revision = TrustPartitionRevision::from_partitions([a.clone(), b]).unwrap();

        assert_eq!(revision.revise(&parse("a and c")), a);
    }

    #[test]
    fn several_partitions() {
        let revision =
            TrustPartitionRevision::from_partitions([parse("a"), parse("-a and b")]).unwrap();
        let revised = revision.revise(&parse("b"));

        assert_eq!(revised.models(), parse("a or b").models());
    }

    #[test]
    fn catch_all_partition() {
        let revision =
            TrustPartitionRevision::from_partitions([parse("a"), parse("-a and b")]).unwrap();
        let revised = revision.revise(&parse("-b"));

        assert_eq!(revised.models(), parse("a or -b").models());
    }

    #[test]
    fn no_partitions() {
        assert_eq!(
            TrustPartitionRevision::from_partitions(Vec::<Proposition>::new()),
            Err(err::ConfigurationError::NoPartitions)
        );
    }

    #[test]
    fn unsatisfiable_sentence() {
        let revision = TrustPartitionRevision::from_partitions([parse("a")]).unwrap();

        assert_eq!(revision.revise(&parse("b and -b")), Proposition::Bottom);
    }

    #[test]
    fn atom_partitions_forget_other_atoms() {
        let atoms = [Atom::from("a")];
        let revision = TrustPartitionRevision::from_atoms(&atoms).unwrap();

        let revised = revision.revise(&parse("-a and b"));
        assert_eq!(revised.models(), parse("-a").models());
    }
}
