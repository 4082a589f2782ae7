/*!
Configuration of a context.

All configuration of a context is contained within the context, and a fresh comparator and sentence revision are built from the configuration for each revision.

The configuration may be mutated directly, though bounded numeric options should be updated through [ConfigOption::set].

```rust
# use belief_revisor::config::Config;
# use belief_revisor::comparator::ComparatorKind;
let mut config = Config::default();
assert_eq!(config.comparator, ComparatorKind::Hamming);

assert!(!config.buckets.set(0));
assert!(config.buckets.set(5));
assert_eq!(config.buckets.value, 5);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::{comparator::ComparatorKind, reports::DisplayMode, trust::TrustKind};

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The ranking of valuations used to select minimal models.
    pub comparator: ComparatorKind,

    /// The revision applied to a sentence before it revises a belief state.
    pub trust: TrustKind,

    /// How a revised belief state is displayed.
    pub display: DisplayMode,

    /// The number of buckets to use when generating a random ordering of valuations.
    pub buckets: ConfigOption<usize>,

    /// The seed to use when generating a random ordering of valuations.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            comparator: ComparatorKind::default(),
            trust: TrustKind::default(),
            display: DisplayMode::default(),

            buckets: ConfigOption {
                name: "buckets",
                min: 1,
                max: usize::MAX,
                value: 3,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn bounded_options() {
        let mut config = Config::default();
        assert_eq!(config.buckets.min_max(), (1, usize::MAX));

        assert!(!config.buckets.set(0));
        assert_eq!(config.buckets.value, 3);

        assert!(config.seed.set(u64::MAX));
        assert_eq!(config.seed.min_max(), (u64::MIN, u64::MAX));
    }
}
