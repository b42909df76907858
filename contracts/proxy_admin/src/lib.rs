#![no_std]
//! ProxyAdmin: an owned contract that acts as the admin of upgradeable
//! proxies, so the owner can inspect and upgrade them without losing access
//! to the proxied components.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Val};

use shared::{CallData, ContractError, ProxyClient};

#[cfg(test)]
mod test;

#[contract]
pub struct ProxyAdmin;

/// Fail with `Unauthorized` unless this contract administers `proxy`.
fn require_administered(env: &Env, proxy: &Address) -> Result<ProxyClient<'static>, ContractError> {
    let client = ProxyClient::new(env, proxy);
    match client.try_admin() {
        Ok(Ok(admin)) if admin == env.current_contract_address() => Ok(client),
        _ => Err(ContractError::Unauthorized),
    }
}

#[contractimpl]
impl ProxyAdmin {
    pub fn initialize(env: Env, owner: Address) -> Result<(), ContractError> {
        authorization::initialize_owner(&env, &owner)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        authorization::get_owner(&env)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), ContractError> {
        authorization::transfer_ownership(&env, &new_owner)?;
        Ok(())
    }

    // ========== Queries ==========

    pub fn get_proxy_implementation(env: Env, proxy: Address) -> Result<Address, ContractError> {
        let client = require_administered(&env, &proxy)?;
        match client.try_implementation() {
            Ok(Ok(implementation)) => Ok(implementation),
            _ => Err(ContractError::Unauthorized),
        }
    }

    pub fn get_proxy_admin(env: Env, proxy: Address) -> Result<Address, ContractError> {
        match ProxyClient::new(&env, &proxy).try_admin() {
            Ok(Ok(admin)) => Ok(admin),
            _ => Err(ContractError::Unauthorized),
        }
    }

    // ========== Owner operations ==========

    /// Hand `proxy` over to `new_admin`. This contract loses control of it.
    pub fn change_proxy_admin(env: Env, proxy: Address, new_admin: Address) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        let client = require_administered(&env, &proxy)?;
        match client.try_change_admin(&new_admin) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::Unauthorized),
        }
    }

    pub fn upgrade(env: Env, proxy: Address, implementation: Address) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        let client = require_administered(&env, &proxy)?;
        match client.try_upgrade_to(&implementation) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(&env, "upgrade rejected", proxy, implementation);
                Err(ContractError::UpgradeRejected)
            }
        }
    }

    /// Upgrade `proxy` and run `call` on the new implementation in one step.
    pub fn upgrade_and_call(
        env: Env,
        proxy: Address,
        implementation: Address,
        call: CallData,
    ) -> Result<Val, ContractError> {
        authorization::require_owner(&env)?;
        let client = require_administered(&env, &proxy)?;
        match client.try_upgrade_to_and_call(&implementation, &call) {
            Ok(Ok(output)) => Ok(output),
            _ => {
                log!(&env, "upgrade rejected", proxy, implementation, call.function);
                Err(ContractError::UpgradeRejected)
            }
        }
    }
}
