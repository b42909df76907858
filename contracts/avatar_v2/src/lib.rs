#![no_std]
//! Avatar component, second generation.
//!
//! Reads the same slots as the first generation, so a proxy can switch to it
//! in place. Adds renaming and a one-shot `migrate` step meant to be run via
//! `upgrade_to_and_call`.

use soroban_sdk::{contract, contractimpl, Env, IntoVal, Map, String, Symbol, TryFromVal, Val};

use shared::{validate_name, CallData, ContractError, Outcome};


pub const COMPONENT_ID: u32 = 2;

fn org_name_key(env: &Env) -> Symbol {
    Symbol::new(env, "org_name")
}

fn migrated_key(env: &Env) -> Symbol {
    Symbol::new(env, "migrated")
}

fn is_migrated(env: &Env, storage: &Map<Symbol, Val>) -> bool {
    storage
        .get(migrated_key(env))
        .and_then(|raw| bool::try_from_val(env, &raw).ok())
        .unwrap_or(false)
}

#[contract]
pub struct AvatarV2;

#[contractimpl]
impl AvatarV2 {
    pub fn execute(
        env: Env,
        storage: Map<Symbol, Val>,
        call: CallData,
    ) -> Result<Outcome, ContractError> {
        let mut storage = storage;
        let key = org_name_key(&env);

        let output: Val = if call.is(&env, "initialize") {
            if storage.contains_key(key.clone()) {
                return Err(ContractError::AlreadyInitialized);
            }
            let org_name: String = call.arg(&env, 0)?;
            storage.set(key, org_name.into_val(&env));
            storage.set(migrated_key(&env), true.into_val(&env));
            ().into_val(&env)
        } else if call.is(&env, "org_name") {
            let raw = storage.get(key).ok_or(ContractError::NotInitialized)?;
            String::try_from_val(&env, &raw)
                .map_err(|_| ContractError::InvalidState)?
                .into_val(&env)
        } else if call.is(&env, "rename") {
            if !storage.contains_key(key.clone()) {
                return Err(ContractError::NotInitialized);
            }
            let org_name: String = call.arg(&env, 0)?;
            validate_name(&org_name)?;
            storage.set(key, org_name.into_val(&env));
            ().into_val(&env)
        } else if call.is(&env, "migrate") {
            if !storage.contains_key(key) {
                return Err(ContractError::NotInitialized);
            }
            if is_migrated(&env, &storage) {
                return Err(ContractError::InvalidState);
            }
            storage.set(migrated_key(&env), true.into_val(&env));
            ().into_val(&env)
        } else if call.is(&env, "is_migrated") {
            is_migrated(&env, &storage).into_val(&env)
        } else if call.is(&env, "get_id") {
            COMPONENT_ID.into_val(&env)
        } else {
            return Err(ContractError::UnknownFunction);
        };

        Ok(Outcome { storage, output })
    }
}
