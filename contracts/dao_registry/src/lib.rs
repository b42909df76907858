#![no_std]
//! DAO Registry
//!
//! Owner-gated name → address registry. In production the owner is a
//! governance scheme contract, so entries only change after a vote.
//!
//! Each registry belongs to exactly one organization, fixed at
//! initialization. The scheme only accepts proposals against a registry from
//! the organization it belongs to.
//!
//! Entries are never erased: unregistering clears the flag and keeps the
//! record, which lets callers tell a name that was never seen apart from one
//! that was unregistered.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

use shared::{validate_name, ContractError};

mod storage;
mod types;


pub use types::{RegistrationStatus, RegistryEntry};

#[contract]
pub struct DaoRegistry;

#[contractimpl]
impl DaoRegistry {
    /// Initialize the registry for `organization`. Neither the owner nor the
    /// organization can be changed afterwards.
    pub fn initialize(env: Env, owner: Address, organization: Address) -> Result<(), ContractError> {
        authorization::initialize_owner(&env, &owner)?;
        storage::set_organization(&env, &organization);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        authorization::get_owner(&env)
    }

    pub fn organization(env: Env) -> Result<Address, ContractError> {
        storage::get_organization(&env).ok_or(ContractError::NotInitialized)
    }

    /// Register `name` to `address` (owner only)
    pub fn register(env: Env, address: Address, name: String) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        validate_name(&name)?;

        if let Some(entry) = storage::get_entry(&env, &name) {
            if entry.registered {
                return Err(ContractError::AlreadyRegistered);
            }
        }

        let entry = RegistryEntry {
            address: address.clone(),
            registered: true,
            updated_at: env.ledger().timestamp(),
        };
        storage::set_entry(&env, &name, &entry);

        env.events()
            .publish((symbol_short!("register"), address), name);

        Ok(())
    }

    /// Clear the registration of `name` (owner only).
    ///
    /// Unregistering a name that is not currently registered succeeds without
    /// changing anything or emitting an event.
    pub fn un_register(env: Env, address: Address, name: String) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;

        let mut entry = match storage::get_entry(&env, &name) {
            Some(entry) if entry.registered => entry,
            _ => return Ok(()),
        };
        if entry.address != address {
            return Err(ContractError::InvalidInput);
        }

        entry.registered = false;
        entry.updated_at = env.ledger().timestamp();
        storage::set_entry(&env, &name, &entry);

        env.events()
            .publish((Symbol::new(&env, "unregister"), address), name);

        Ok(())
    }

    pub fn is_registered(env: Env, name: String) -> bool {
        storage::get_entry(&env, &name)
            .map(|entry| entry.registered)
            .unwrap_or(false)
    }

    pub fn get_entry(env: Env, name: String) -> Result<RegistryEntry, ContractError> {
        storage::get_entry(&env, &name).ok_or(ContractError::NotFound)
    }

    pub fn status(env: Env, name: String) -> RegistrationStatus {
        match storage::get_entry(&env, &name) {
            None => RegistrationStatus::Unknown,
            Some(entry) if entry.registered => RegistrationStatus::Registered,
            Some(_) => RegistrationStatus::Unregistered,
        }
    }

    /// Signal that `avatar` asks to be listed. Purely informational; the
    /// listing itself goes through governance.
    pub fn propose(env: Env, avatar: Address) {
        avatar.require_auth();
        env.events().publish((symbol_short!("propose"),), avatar);
    }
}
