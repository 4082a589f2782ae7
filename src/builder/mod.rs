/*!
Tools for building propositions and belief states from text.

# Syntax

Operands are:
- `1`, a tautology.
- `0`, a contradiction.
- Any (non-empty) string of alphabetic characters, an atom.
  Atom names are read in lowercase, so `P` and `p` are the same atom.

Operators, from loosest to tightest binding, are:

| Operator       | Reading             |
|----------------|---------------------|
| `iff`          | biconditional       |
| `then`         | material implication |
| `or`, `xor`    | (exclusive) disjunction |
| `and`, `nand`  | (negated) conjunction |
| `-`            | negation (prefix)   |

Binary operators associate to the left, and parentheses may be used to group.
Operators are read regardless of case.

# Examples

```rust
# use belief_revisor::structures::proposition::Proposition;
let formula: Proposition = "a and b then -(c or d)".parse().unwrap();
let grouped: Proposition = "(a and b) then (-(c or d))".parse().unwrap();
assert_eq!(formula, grouped);

let tautology: Proposition = "P OR -p".parse().unwrap();
assert_eq!(tautology.models().len(), 2);
```

Propositions [display](std::fmt::Display) in the same syntax.

```rust
# use belief_revisor::structures::proposition::Proposition;
let formula: Proposition = "a xor (b iff c)".parse().unwrap();
let reparsed: Proposition = formula.to_string().parse().unwrap();
assert_eq!(formula.models(), reparsed.models());
```
*/

mod parse;

use crate::{
    structures::{belief_state::BeliefState, proposition::Proposition},
    types::err::{self},
};

/// Parses each string as a proposition and collects the propositions into a belief state.
///
/// The first failure to parse is returned as an error.
pub fn belief_state_from<'a>(
    sentences: impl IntoIterator<Item = &'a str>,
) -> Result<BeliefState, err::ParseError> {
    sentences
        .into_iter()
        .map(|sentence| sentence.parse::<Proposition>())
        .collect()
}
