/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when experimenting with revision, or extending the library.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [revision](crate::revision)
    pub const REVISION: &str = "revision";

    /// Logs related to [comparators](crate::comparator), e.g. the rank given to a valuation
    pub const COMPARATOR: &str = "comparator";

    /// Logs related to [sentence revision](crate::trust)
    pub const TRUST: &str = "trust";

    /// Logs related to the enumeration of models
    pub const MODELS: &str = "models";

    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";
}
