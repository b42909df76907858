use soroban_sdk::{contracttype, Address, Env, Map, Symbol, Val};

use shared::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

/// Proxy-owned storage. `Slots` is the instance's component state; the
/// implementation itself never holds state.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Implementation,
    Slots,
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_implementation(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Implementation)
}

pub fn set_implementation(env: &Env, implementation: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Implementation, implementation);
}

pub fn get_slots(env: &Env) -> Map<Symbol, Val> {
    let slots = env.storage().persistent().get(&DataKey::Slots);
    if slots.is_some() {
        env.storage().persistent().extend_ttl(
            &DataKey::Slots,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    slots.unwrap_or_else(|| Map::new(env))
}

pub fn set_slots(env: &Env, slots: &Map<Symbol, Val>) {
    env.storage().persistent().set(&DataKey::Slots, slots);
    env.storage().persistent().extend_ttl(
        &DataKey::Slots,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
