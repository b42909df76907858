use soroban_sdk::{contracttype, Address};

use shared::Version;

/// Package bound under a name, pinned to one of its versions
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageBinding {
    pub package: Address,
    pub version: Version,
}
