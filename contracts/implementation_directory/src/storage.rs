use soroban_sdk::{contracttype, Address, Env, String};

use shared::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Implementation(String),
    Frozen,
}

// ── Implementations ──────────────────────────────────────────────────────────

pub fn set_implementation(env: &Env, name: &String, implementation: &Address) {
    let key = DataKey::Implementation(name.clone());
    env.storage().persistent().set(&key, implementation);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_implementation(env: &Env, name: &String) -> Option<Address> {
    let key = DataKey::Implementation(name.clone());
    let implementation = env.storage().persistent().get(&key);
    if implementation.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    implementation
}

// ── Freeze flag ──────────────────────────────────────────────────────────────

pub fn is_frozen(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Frozen).unwrap_or(false)
}

pub fn set_frozen(env: &Env) {
    env.storage().instance().set(&DataKey::Frozen, &true);
}
