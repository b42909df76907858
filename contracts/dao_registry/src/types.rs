use soroban_sdk::{contracttype, Address};

/// Registry record for a name. Kept after unregistration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryEntry {
    /// Address the name was last registered to
    pub address: Address,
    pub registered: bool,
    /// Ledger timestamp of the last change
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistrationStatus {
    /// Never registered
    Unknown,
    Registered,
    /// Registered once, currently not
    Unregistered,
}
