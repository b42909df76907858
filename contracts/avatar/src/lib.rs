#![no_std]
//! Avatar component: an organisation's identity, run behind a proxy.
//!
//! Stateless; every call receives the proxy's slots and returns them updated.

use soroban_sdk::{contract, contractimpl, Env, IntoVal, Map, String, Symbol, TryFromVal, Val};

use shared::{CallData, ContractError, Outcome};


pub const COMPONENT_ID: u32 = 1;

fn org_name_key(env: &Env) -> Symbol {
    Symbol::new(env, "org_name")
}

#[contract]
pub struct Avatar;

#[contractimpl]
impl Avatar {
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
            ().into_val(&env)
        } else if call.is(&env, "org_name") {
            let raw = storage.get(key).ok_or(ContractError::NotInitialized)?;
            String::try_from_val(&env, &raw)
                .map_err(|_| ContractError::InvalidState)?
                .into_val(&env)
        } else if call.is(&env, "get_id") {
            COMPONENT_ID.into_val(&env)
        } else {
            return Err(ContractError::UnknownFunction);
        };

        Ok(Outcome { storage, output })
    }
}
