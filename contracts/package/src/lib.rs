#![no_std]
//! Package: an append-only set of versions, each bound to an implementation
//! directory and a content hash.

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Vec};

use shared::{ContractError, Version, VersionEntry};

mod storage;
mod types;


pub use types::VersionPolicy;

#[contract]
pub struct Package;

#[contractimpl]
impl Package {
    /// Initialize the package with its owner and version ordering policy.
    pub fn initialize(env: Env, owner: Address, policy: VersionPolicy) -> Result<(), ContractError> {
        authorization::initialize_owner(&env, &owner)?;
        storage::set_policy(&env, &policy);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        authorization::get_owner(&env)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), ContractError> {
        authorization::transfer_ownership(&env, &new_owner)?;
        Ok(())
    }

    pub fn version_policy(env: Env) -> VersionPolicy {
        storage::get_policy(&env)
    }

    /// Add `version`, bound to `directory`. `None` is the null directory
    /// reference and is rejected. Versions are immutable once added.
    pub fn add_version(
        env: Env,
        version: Version,
        directory: Option<Address>,
        content_hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        let directory = directory.ok_or(ContractError::InvalidReference)?;

        if storage::has_entry(&env, &version) {
            return Err(ContractError::DuplicateVersion);
        }

        if storage::get_policy(&env) == VersionPolicy::StrictlyIncreasing {
            if let Some(latest) = storage::get_versions(&env).last() {
                if version <= latest {
                    return Err(ContractError::VersionNotIncreasing);
                }
            }
        }

        let entry = VersionEntry {
            directory: directory.clone(),
            content_hash: content_hash.clone(),
            added_at: env.ledger().timestamp(),
        };
        storage::append_entry(&env, &version, &entry);

        env.events().publish(
            (Symbol::new(&env, "version_added"), version),
            (directory, content_hash),
        );

        Ok(())
    }

    pub fn get_version(env: Env, version: Version) -> Result<VersionEntry, ContractError> {
        storage::get_entry(&env, &version).ok_or(ContractError::NotFound)
    }

    pub fn has_version(env: Env, version: Version) -> bool {
        storage::has_entry(&env, &version)
    }

    /// Directory of `version`
    pub fn get_directory(env: Env, version: Version) -> Result<Address, ContractError> {
        Self::get_version(env, version).map(|entry| entry.directory)
    }

    /// The most recently added version, the package's current one.
    pub fn latest_version(env: Env) -> Result<Version, ContractError> {
        storage::get_versions(&env)
            .last()
            .ok_or(ContractError::NotFound)
    }

    /// Highest version with the given major number.
    pub fn latest_by_major(env: Env, major: u32) -> Result<Version, ContractError> {
        let mut best: Option<Version> = None;
        for version in storage::get_versions(&env).iter() {
            if version.major != major {
                continue;
            }
            best = match best {
                Some(current) if current >= version => Some(current),
                _ => Some(version),
            };
        }
        best.ok_or(ContractError::NotFound)
    }

    /// All versions, in the order they were added.
    pub fn versions(env: Env) -> Vec<Version> {
        storage::get_versions(&env)
    }
}
