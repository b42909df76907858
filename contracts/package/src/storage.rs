use soroban_sdk::{contracttype, Env, Vec};

use shared::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use shared::{Version, VersionEntry};

use crate::types::VersionPolicy;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Policy,
    Entry(Version),
    /// Versions in the order they were added
    Versions,
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Policy ───────────────────────────────────────────────────────────────────

pub fn set_policy(env: &Env, policy: &VersionPolicy) {
    env.storage().instance().set(&DataKey::Policy, policy);
}

pub fn get_policy(env: &Env) -> VersionPolicy {
    env.storage()
        .instance()
        .get(&DataKey::Policy)
        .unwrap_or(VersionPolicy::Unordered)
}

// ── Version entries ──────────────────────────────────────────────────────────

pub fn has_entry(env: &Env, version: &Version) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Entry(version.clone()))
}

pub fn get_entry(env: &Env, version: &Version) -> Option<VersionEntry> {
    let key = DataKey::Entry(version.clone());
    let entry = env.storage().persistent().get(&key);
    if entry.is_some() {
        bump(env, &key);
    }
    entry
}

/// Store a new entry and append its version to the added-order list.
pub fn append_entry(env: &Env, version: &Version, entry: &VersionEntry) {
    let key = DataKey::Entry(version.clone());
    env.storage().persistent().set(&key, entry);
    bump(env, &key);

    let mut versions = get_versions(env);
    versions.push_back(version.clone());
    env.storage().persistent().set(&DataKey::Versions, &versions);
    bump(env, &DataKey::Versions);
}

pub fn get_versions(env: &Env) -> Vec<Version> {
    env.storage()
        .persistent()
        .get(&DataKey::Versions)
        .unwrap_or_else(|| Vec::new(env))
}
