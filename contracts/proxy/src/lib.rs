#![no_std]
//! # AdminUpgradeabilityProxy
//!
//! A stable address in front of a replaceable, stateless component. The proxy
//! owns the instance state (its slots) and hands it to the current
//! implementation's `execute` on every forwarded call.
//!
//! ## Roles
//! - **admin**: may upgrade the implementation and hand over the admin role.
//!   The admin's calls through `call` are never forwarded.
//! - **everyone else**: calls through `call` are forwarded to the
//!   implementation.

use soroban_sdk::{contract, contractimpl, log, Address, Env, IntoVal, Map, Symbol, Val};

use shared::{validate_call, CallData, ComponentClient, ContractError, Outcome};

pub mod dispatch;
mod storage;

#[cfg(test)]
mod test;

pub use dispatch::{AdminCall, Dispatch};

#[contract]
pub struct AdminUpgradeabilityProxy;

/// Run `call` on `implementation` against `slots`.
///
/// `Err(Ok(_))` carries the component's own error; `Err(Err(()))` is any
/// other failure of the delegate call.
fn delegate(
    env: &Env,
    implementation: &Address,
    slots: &Map<Symbol, Val>,
    call: &CallData,
) -> Result<Outcome, Result<ContractError, ()>> {
    match ComponentClient::new(env, implementation).try_execute(slots, call) {
        Ok(Ok(outcome)) => Ok(outcome),
        Err(Ok(err)) => Err(Ok(err)),
        _ => Err(Err(())),
    }
}

fn require_admin(env: &Env) -> Result<Address, ContractError> {
    let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
    admin.require_auth();
    authorization::bump_instance(env);
    Ok(admin)
}

fn implementation_of(env: &Env) -> Result<Address, ContractError> {
    storage::get_implementation(env).ok_or(ContractError::NotInitialized)
}

fn do_upgrade_to(env: &Env, implementation: &Address) {
    storage::set_implementation(env, implementation);
    env.events()
        .publish((Symbol::new(env, "upgraded"),), implementation.clone());
}

fn do_upgrade_to_and_call(
    env: &Env,
    implementation: &Address,
    call: &CallData,
) -> Result<Val, ContractError> {
    validate_call(call)?;
    let outcome = match delegate(env, implementation, &storage::get_slots(env), call) {
        Ok(outcome) => outcome,
        Err(_) => {
            log!(env, "migration rejected", implementation, call.function);
            return Err(ContractError::UpgradeRejected);
        }
    };

    do_upgrade_to(env, implementation);
    storage::set_slots(env, &outcome.storage);
    Ok(outcome.output)
}

fn do_change_admin(env: &Env, previous: &Address, admin: &Address) {
    storage::set_admin(env, admin);
    env.events().publish(
        (Symbol::new(env, "admin_changed"),),
        (previous.clone(), admin.clone()),
    );
}

#[contractimpl]
impl AdminUpgradeabilityProxy {
    /// Bind the proxy to `admin` and `implementation` and run the optional
    /// initializer against fresh storage. Callable once.
    pub fn initialize(
        env: Env,
        admin: Address,
        implementation: Address,
        init: Option<CallData>,
    ) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        if let Some(call) = init {
            validate_call(&call)?;
            let empty = Map::new(&env);
            match delegate(&env, &implementation, &empty, &call) {
                Ok(outcome) => storage::set_slots(&env, &outcome.storage),
                Err(_) => {
                    log!(&env, "initializer rejected", implementation, call.function);
                    return Err(ContractError::InitializationFailed);
                }
            }
        }

        storage::set_admin(&env, &admin);
        storage::set_implementation(&env, &implementation);
        authorization::bump_instance(&env);
        Ok(())
    }

    /// Generic entry point. `caller` decides where the call goes: the admin
    /// reaches the admin functions, anyone else reaches the implementation.
    pub fn call(env: Env, caller: Address, call: CallData) -> Result<Val, ContractError> {
        caller.require_auth();
        let admin = storage::get_admin(&env).ok_or(ContractError::NotInitialized)?;
        authorization::bump_instance(&env);

        match Dispatch::classify(&env, &admin, &caller, call)? {
            Dispatch::Admin(AdminCall::Implementation) => {
                Ok(implementation_of(&env)?.into_val(&env))
            }
            Dispatch::Admin(AdminCall::Admin) => Ok(admin.into_val(&env)),
            Dispatch::Admin(AdminCall::UpgradeTo(implementation)) => {
                do_upgrade_to(&env, &implementation);
                Ok(().into_val(&env))
            }
            Dispatch::Admin(AdminCall::UpgradeToAndCall(implementation, call)) => {
                do_upgrade_to_and_call(&env, &implementation, &call)
            }
            Dispatch::Admin(AdminCall::ChangeAdmin(next)) => {
                do_change_admin(&env, &admin, &next);
                Ok(().into_val(&env))
            }
            Dispatch::Forward(call) => {
                validate_call(&call)?;
                let implementation = implementation_of(&env)?;
                match delegate(&env, &implementation, &storage::get_slots(&env), &call) {
                    Ok(outcome) => {
                        storage::set_slots(&env, &outcome.storage);
                        Ok(outcome.output)
                    }
                    Err(Ok(err)) => Err(err),
                    Err(Err(())) => {
                        log!(&env, "delegate call failed", implementation, call.function);
                        Err(ContractError::DelegateCallFailed)
                    }
                }
            }
        }
    }

    // ========== Admin surface ==========

    pub fn admin(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    /// Current implementation (admin only). Anyone else reaches the
    /// component's own `implementation`, if it has one, through `call`.
    pub fn implementation(env: Env) -> Result<Address, ContractError> {
        require_admin(&env)?;
        implementation_of(&env)
    }

    /// Point the proxy at `implementation`. Repeating the same upgrade is a
    /// no-op apart from the event.
    pub fn upgrade_to(env: Env, implementation: Address) -> Result<(), ContractError> {
        require_admin(&env)?;
        do_upgrade_to(&env, &implementation);
        Ok(())
    }

    /// Upgrade and run `call` on the new implementation. The pointer and the
    /// slots only change if the call succeeds.
    pub fn upgrade_to_and_call(
        env: Env,
        implementation: Address,
        call: CallData,
    ) -> Result<Val, ContractError> {
        require_admin(&env)?;
        do_upgrade_to_and_call(&env, &implementation, &call)
    }

    pub fn change_admin(env: Env, admin: Address) -> Result<(), ContractError> {
        let previous = require_admin(&env)?;
        do_change_admin(&env, &previous, &admin);
        Ok(())
    }
}
