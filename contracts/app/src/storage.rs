use soroban_sdk::{contracttype, Address, BytesN, Env, String};

use shared::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

use crate::types::PackageBinding;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ProxyWasm,
    Package(String),
    ProxyCount,
    Proxy(u64),
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Proxy code ───────────────────────────────────────────────────────────────

pub fn set_proxy_wasm(env: &Env, hash: &BytesN<32>) {
    env.storage().instance().set(&DataKey::ProxyWasm, hash);
}

pub fn get_proxy_wasm(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&DataKey::ProxyWasm)
}

// ── Package bindings ─────────────────────────────────────────────────────────

pub fn set_binding(env: &Env, name: &String, binding: &PackageBinding) {
    let key = DataKey::Package(name.clone());
    env.storage().persistent().set(&key, binding);
    bump(env, &key);
}

pub fn get_binding(env: &Env, name: &String) -> Option<PackageBinding> {
    let key = DataKey::Package(name.clone());
    let binding = env.storage().persistent().get(&key);
    if binding.is_some() {
        bump(env, &key);
    }
    binding
}

pub fn remove_binding(env: &Env, name: &String) {
    env.storage()
        .persistent()
        .remove(&DataKey::Package(name.clone()));
}

// ── Created proxies ──────────────────────────────────────────────────────────

pub fn get_proxy_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProxyCount)
        .unwrap_or(0)
}

/// Record a created proxy under the next index and return that index.
pub fn push_proxy(env: &Env, proxy: &Address) -> u64 {
    let index = get_proxy_count(env);
    let key = DataKey::Proxy(index);
    env.storage().persistent().set(&key, proxy);
    bump(env, &key);
    env.storage()
        .instance()
        .set(&DataKey::ProxyCount, &(index + 1));
    index
}

pub fn get_proxy(env: &Env, index: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Proxy(index))
}
