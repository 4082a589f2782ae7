use clap::{builder::ArgPredicate, value_parser, Arg, ArgAction, Command};

use belief_revisor::{comparator::ComparatorKind, reports::DisplayMode, trust::TrustKind};

pub fn cli() -> Command {
    Command::new("revisor_cli")
        .about("Revises a belief state by a sentence, keeping the models of the sentence closest to the belief state")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("sentence")
            .value_name("SENTENCE")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(String))
            .help("The sentence to revise the belief state by.")
            .long_help("The sentence to revise the belief state by.

Operands are atoms (alphabetic, case-insensitive), '1' for truth, and '0' for falsity.
Operators, loosest first, are 'iff', 'then', 'or' and 'xor', 'and' and 'nand', and prefix '-' for negation.
For example, '-(p and q) then r'.
A sentence beginning with '-' may follow '--', e.g. '-- -p'."))

        .arg(Arg::new("belief")
            .short('b')
            .long("belief")
            .value_name("SENTENCE")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .action(ArgAction::Append)
            .help("A sentence of the belief state, may be given multiple times.")
            .long_help("A sentence of the belief state, may be given multiple times.

Without any sentence, the belief state is vacuous."))

        .arg(Arg::new("ordering")
            .short('o')
            .long("ordering")
            .value_parser(ComparatorKind::NAMES)
            .required(false)
            .num_args(1)
            .default_value_ifs([
                ("weight", ArgPredicate::IsPresent, Some("weighted")),
                ("bias", ArgPredicate::IsPresent, Some("set-inclusion")),
                ("rank", ArgPredicate::IsPresent, Some("ordered-sets")),
            ])
            .help("The ordering of valuations used to find minimal models.")
            .long_help("The ordering of valuations used to find minimal models.
Default: hamming, or the ordering of '--weight', '--bias', or '--rank' when given.

- hamming: the least number of atoms on which a valuation disagrees with some model of the belief state.
- weighted: as hamming, but with each disagreement counted by the weight of the atom, see '--weight'.
- set-inclusion: the number of bias sentences true on a valuation, more being closer, see '--bias'.
- ordered-sets: the first of the belief state, the ranks, and truth which is true on a valuation, see '--rank'."))

        .arg(Arg::new("weight")
            .short('w')
            .long("weight")
            .value_name("ATOM=WEIGHT")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .action(ArgAction::Append)
            .conflicts_with_all(["bias", "rank"])
            .help("The weight of an atom for the weighted ordering, e.g. 'a=5'.
Atoms without a weight have weight 0."))

        .arg(Arg::new("bias")
            .long("bias")
            .value_name("SENTENCE")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .action(ArgAction::Append)
            .conflicts_with("rank")
            .help("A bias sentence for the set-inclusion ordering.
Without any bias, the sentences of the belief state are used."))

        .arg(Arg::new("rank")
            .short('r')
            .long("rank")
            .value_name("SENTENCE")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .action(ArgAction::Append)
            .help("The next rank of the ordered-sets ordering, after the belief state."))

        .arg(Arg::new("random_ranks")
            .long("random-ranks")
            .value_name("ATOMS")
            .value_parser(value_parser!(String))
            .value_delimiter(',')
            .required(false)
            .num_args(1)
            .action(ArgAction::Append)
            .conflicts_with_all(["ordering", "weight", "bias", "rank"])
            .help("Use the ordered-sets ordering with ranks from a random ordering of the valuations of the atoms.")
            .long_help("Use the ordered-sets ordering with ranks from a random ordering of the valuations of the atoms.

Each valuation is placed in a random bucket, see '--buckets', and each non-empty bucket is a rank.
The ordering is reproducible, see '--seed'."))

        .arg(Arg::new("buckets")
            .long("buckets")
            .value_parser(value_parser!(usize))
            .required(false)
            .requires("random_ranks")
            .num_args(1)
            .help("The number of buckets for a random ordering.
Default: 3"))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .requires("random_ranks")
            .num_args(1)
            .help("The seed for a random ordering.
Default: 0"))

        .arg(Arg::new("trust")
            .short('t')
            .long("trust")
            .value_parser(TrustKind::NAMES)
            .required(false)
            .num_args(1)
            .default_value_ifs([
                ("partition", ArgPredicate::IsPresent, Some("sentences")),
                ("trust_atom", ArgPredicate::IsPresent, Some("atoms")),
            ])
            .help("How much to trust the sentence.")
            .long_help("How much to trust the sentence.
Default: complete, or the trust of '--partition' or '--trust-atom' when given.

- complete: the sentence is used as given.
- none: the sentence is ignored.
- atoms: the sentence is trusted only on the atoms given, see '--trust-atom'.
- sentences: the sentence is generalised to the partitions it overlaps, see '--partition'."))

        .arg(Arg::new("partition")
            .short('p')
            .long("partition")
            .value_name("SENTENCE")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .action(ArgAction::Append)
            .conflicts_with("trust_atom")
            .help("A trust partition, may be given multiple times."))

        .arg(Arg::new("trust_atom")
            .long("trust-atom")
            .value_name("ATOMS")
            .value_parser(value_parser!(String))
            .value_delimiter(',')
            .required(false)
            .num_args(1)
            .action(ArgAction::Append)
            .help("Atoms whose valuations form the trust partitions."))

        .arg(Arg::new("display")
            .short('d')
            .long("display")
            .value_parser(DisplayMode::NAMES)
            .required(false)
            .num_args(1)
            .help("How to display the revised belief state.")
            .long_help("How to display the revised belief state.
Default: default

- default: as revised, a single sentence.
- models: one line for each model.
- cnf: in conjunctive normal form.
- full-dnf: as the disjunction of its models."))
}
