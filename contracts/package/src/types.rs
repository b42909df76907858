use soroban_sdk::contracttype;

/// Ordering rule applied by `add_version`
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VersionPolicy {
    /// Any new version is accepted; lookups are by exact version only
    Unordered,
    /// Each new version must be greater than the most recently added one
    StrictlyIncreasing,
}
