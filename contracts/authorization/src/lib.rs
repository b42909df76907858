//! Authorization Module
//!
//! Owner-gating shared by every owned contract in the workspace
//! (implementation directories, packages, apps, proxy admins, DAO registries).
//!
//! ## Features
//! - Single owner principal written once at initialization
//! - Soroban auth on every privileged call (`Address::require_auth`)
//! - Optional ownership transfer with an audit event
//!
//! The owner lives in instance storage, so it shares the contract
//! instance's lifetime.

#![no_std]

use shared::constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use shared::errors::ContractError;
use soroban_sdk::{contracttype, Address, Env, Symbol};

/// Storage keys for ownership
#[contracttype]
#[derive(Clone)]
pub enum OwnerKey {
    /// Contract-level owner address
    Owner,
}

/// Extend the contract instance TTL
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Record the owner (call once during contract initialization)
pub fn initialize_owner(env: &Env, owner: &Address) -> Result<(), ContractError> {
    if has_owner(env) {
        return Err(ContractError::AlreadyInitialized);
    }
    env.storage().instance().set(&OwnerKey::Owner, owner);
    bump_instance(env);
    Ok(())
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&OwnerKey::Owner)
}

/// Get the contract owner address
pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OwnerKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

/// Check if an address is the owner
pub fn is_owner(env: &Env, address: &Address) -> bool {
    match get_owner(env) {
        Ok(owner) => owner == *address,
        Err(_) => false,
    }
}

/// Require the owner's authorization for the current invocation
pub fn require_owner(env: &Env) -> Result<Address, ContractError> {
    let owner = get_owner(env)?;
    owner.require_auth();
    bump_instance(env);
    Ok(owner)
}

/// Hand ownership to `new_owner` (owner only). Returns the previous owner.
pub fn transfer_ownership(env: &Env, new_owner: &Address) -> Result<Address, ContractError> {
    let previous = require_owner(env)?;
    env.storage().instance().set(&OwnerKey::Owner, new_owner);

    env.events().publish(
        (Symbol::new(env, "owner_changed"),),
        (previous.clone(), new_owner.clone()),
    );

    Ok(previous)
}
