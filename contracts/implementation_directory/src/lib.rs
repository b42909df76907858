#![no_std]
//! Implementation directory: component name → implementation contract for
//! one version line of a package.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

use shared::{validate_name, ContractError};

mod storage;


#[contract]
pub struct ImplementationDirectory;

#[contractimpl]
impl ImplementationDirectory {
    /// Initialize the directory with its owner. Can only be called once.
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

    /// Bind `name` to `implementation`, replacing any previous binding.
    pub fn set_implementation(
        env: Env,
        name: String,
        implementation: Address,
    ) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        if storage::is_frozen(&env) {
            return Err(ContractError::DirectoryFrozen);
        }
        validate_name(&name)?;

        storage::set_implementation(&env, &name, &implementation);

        env.events().publish(
            (Symbol::new(&env, "implementation_changed"), name),
            implementation,
        );

        Ok(())
    }

    pub fn get_implementation(env: Env, name: String) -> Result<Address, ContractError> {
        storage::get_implementation(&env, &name).ok_or(ContractError::NotFound)
    }

    pub fn has_implementation(env: Env, name: String) -> bool {
        storage::get_implementation(&env, &name).is_some()
    }

    /// Permanently stop accepting implementation changes.
    pub fn freeze(env: Env) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        if storage::is_frozen(&env) {
            return Err(ContractError::DirectoryFrozen);
        }
        storage::set_frozen(&env);

        env.events()
            .publish((symbol_short!("frozen"),), env.current_contract_address());

        Ok(())
    }

    pub fn is_frozen(env: Env) -> bool {
        storage::is_frozen(&env)
    }
}
