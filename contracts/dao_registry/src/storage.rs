use soroban_sdk::{contracttype, Address, Env, String};

use shared::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

use crate::types::RegistryEntry;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Organization whose governance may change this registry
    Organization,
    Entry(String),
}

pub fn set_organization(env: &Env, organization: &Address) {
    env.storage().instance().set(&DataKey::Organization, organization);
}

pub fn get_organization(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Organization)
}

pub fn get_entry(env: &Env, name: &String) -> Option<RegistryEntry> {
    let key = DataKey::Entry(name.clone());
    let entry = env.storage().persistent().get(&key);
    if entry.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    entry
}

pub fn set_entry(env: &Env, name: &String, entry: &RegistryEntry) {
    let key = DataKey::Entry(name.clone());
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
