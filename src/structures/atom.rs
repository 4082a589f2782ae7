/*!
Atoms (aka. 'variables').

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.

An atom is identified by its name, and two atoms with the same name are the same atom.
Names are stored in lowercase, following the parser (see [builder](crate::builder)), though nothing requires this when building an atom directly.

```rust
# use belief_revisor::structures::atom::Atom;
let p = Atom::from("p");
assert_eq!(p, Atom::from("p"));
assert!(p < Atom::from("q"));
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

use std::rc::Rc;

/// An atom, aka. a 'variable'.
///
/// Atoms are ordered by name, and this ordering fixes the order in which valuations are enumerated.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    name: Rc<str>,
}

impl Atom {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom { name: name.into() }
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Atom { name: name.into() }
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
