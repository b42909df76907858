#![no_std]
//! App: the factory. Binds package names to (package, version) pairs and
//! creates upgradeable proxies for the components those packages resolve to.
//!
//! Resolution chain for `create(package_name, contract_name, ..)`:
//! package name → binding → version entry → directory → implementation.

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol};

use shared::{
    validate_call, validate_name, CallData, ContractError, ImplementationProviderClient,
    PackageClient, ProxyClient, Version,
};

mod deploy;
mod storage;
mod types;


pub use types::PackageBinding;

#[contract]
pub struct App;

/// Deployment salt for the `index`-th proxy of this App.
fn proxy_salt(env: &Env, index: u64) -> BytesN<32> {
    let mut salt = [0u8; 32];
    salt[24..].copy_from_slice(&index.to_be_bytes());
    BytesN::from_array(env, &salt)
}

#[contractimpl]
impl App {
    /// Initialize the App with its owner and the code hash every created
    /// proxy is deployed from.
    pub fn initialize(env: Env, owner: Address, proxy_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        authorization::initialize_owner(&env, &owner)?;
        storage::set_proxy_wasm(&env, &proxy_wasm_hash);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        authorization::get_owner(&env)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), ContractError> {
        authorization::transfer_ownership(&env, &new_owner)?;
        Ok(())
    }

    pub fn set_proxy_wasm(env: Env, proxy_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        storage::set_proxy_wasm(&env, &proxy_wasm_hash);
        Ok(())
    }

    pub fn proxy_wasm(env: Env) -> Result<BytesN<32>, ContractError> {
        storage::get_proxy_wasm(&env).ok_or(ContractError::NotInitialized)
    }

    // ========== Package bindings ==========

    /// Bind `package_name` to `version` of `package`, replacing any previous
    /// binding. The package must already contain that version.
    pub fn set_package(
        env: Env,
        package_name: String,
        package: Address,
        version: Version,
    ) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        validate_name(&package_name)?;

        let known = PackageClient::new(&env, &package).try_has_version(&version);
        if !matches!(known, Ok(Ok(true))) {
            return Err(ContractError::NotFound);
        }

        let binding = PackageBinding {
            package: package.clone(),
            version: version.clone(),
        };
        storage::set_binding(&env, &package_name, &binding);

        env.events().publish(
            (Symbol::new(&env, "package_changed"), package_name),
            (package, version),
        );

        Ok(())
    }

    pub fn unset_package(env: Env, package_name: String) -> Result<(), ContractError> {
        authorization::require_owner(&env)?;
        if storage::get_binding(&env, &package_name).is_none() {
            return Err(ContractError::NotFound);
        }
        storage::remove_binding(&env, &package_name);

        env.events()
            .publish((Symbol::new(&env, "package_removed"), package_name), ());

        Ok(())
    }

    pub fn get_package(env: Env, package_name: String) -> Result<PackageBinding, ContractError> {
        storage::get_binding(&env, &package_name).ok_or(ContractError::NotFound)
    }

    /// Package bound under `package_name`
    pub fn get_provider(env: Env, package_name: String) -> Result<Address, ContractError> {
        Self::get_package(env, package_name).map(|binding| binding.package)
    }

    /// Resolve `contract_name` through the package bound under `package_name`.
    pub fn get_implementation(
        env: Env,
        package_name: String,
        contract_name: String,
    ) -> Result<Address, ContractError> {
        let binding =
            storage::get_binding(&env, &package_name).ok_or(ContractError::UnresolvedComponent)?;

        let entry = match PackageClient::new(&env, &binding.package).try_get_version(&binding.version) {
            Ok(Ok(entry)) => entry,
            _ => return Err(ContractError::UnresolvedComponent),
        };

        match ImplementationProviderClient::new(&env, &entry.directory)
            .try_get_implementation(&contract_name)
        {
            Ok(Ok(implementation)) => Ok(implementation),
            _ => Err(ContractError::UnresolvedComponent),
        }
    }

    // ========== Factory ==========

    /// Deploy a proxy administered by `admin` in front of the resolved
    /// implementation and run `init` through it.
    ///
    /// Deployment and initialization happen in this one invocation; if the
    /// initializer fails the error unwinds the deployment as well.
    pub fn create(
        env: Env,
        package_name: String,
        contract_name: String,
        admin: Address,
        init: CallData,
    ) -> Result<Address, ContractError> {
        validate_call(&init)?;
        let implementation = Self::get_implementation(env.clone(), package_name, contract_name)?;
        let wasm_hash = storage::get_proxy_wasm(&env).ok_or(ContractError::NotInitialized)?;

        let index = storage::get_proxy_count(&env);
        let proxy = deploy::deploy_proxy(&env, wasm_hash, proxy_salt(&env, index));

        let initialized =
            ProxyClient::new(&env, &proxy).try_initialize(&admin, &implementation, &Some(init));
        if !matches!(initialized, Ok(Ok(()))) {
            return Err(ContractError::InitializationFailed);
        }

        storage::push_proxy(&env, &proxy);
        authorization::bump_instance(&env);

        env.events()
            .publish((Symbol::new(&env, "proxy_created"),), proxy.clone());

        Ok(proxy)
    }

    /// Number of proxies this App has created
    pub fn proxy_count(env: Env) -> u64 {
        storage::get_proxy_count(&env)
    }

    pub fn get_proxy(env: Env, index: u64) -> Result<Address, ContractError> {
        storage::get_proxy(&env, index).ok_or(ContractError::NotFound)
    }
}
