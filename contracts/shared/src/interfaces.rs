//! Cross-contract interfaces
//!
//! Contracts talk to each other through these clients instead of linking the
//! other contract crates, so every contract still builds to its own wasm.

use soroban_sdk::{contractclient, Address, BytesN, Env, Map, String, Symbol, Val};

use crate::errors::ContractError;
use crate::types::{CallData, Outcome, Version, VersionEntry};

/// ABI every component implementation exposes.
///
/// The component is stateless: it receives the calling proxy's storage and
/// returns the storage to persist together with the call's output. Errors are
/// the component's own and travel back to the proxy's caller unchanged.
#[contractclient(name = "ComponentClient")]
pub trait Component {
    fn execute(
        env: Env,
        storage: Map<Symbol, Val>,
        call: CallData,
    ) -> Result<Outcome, ContractError>;
}

/// Name → implementation lookup (implementation directories)
#[contractclient(name = "ImplementationProviderClient")]
pub trait ImplementationProvider {
    fn get_implementation(env: Env, name: String) -> Address;
}

/// Version lookup (packages)
#[contractclient(name = "PackageClient")]
pub trait PackageInterface {
    fn get_version(env: Env, version: Version) -> VersionEntry;
    fn has_version(env: Env, version: Version) -> bool;
}

/// Admin surface and initializer of an upgradeable proxy
#[contractclient(name = "ProxyClient")]
pub trait UpgradeableProxy {
    fn initialize(env: Env, admin: Address, implementation: Address, init: Option<CallData>);
    fn call(env: Env, caller: Address, call: CallData) -> Val;
    fn admin(env: Env) -> Address;
    fn implementation(env: Env) -> Address;
    fn upgrade_to(env: Env, implementation: Address);
    fn upgrade_to_and_call(env: Env, implementation: Address, call: CallData) -> Val;
    fn change_admin(env: Env, admin: Address);
}

/// Owner-gated name registry
#[contractclient(name = "RegistryClient")]
pub trait NameRegistry {
    fn register(env: Env, address: Address, name: String);
    fn un_register(env: Env, address: Address, name: String);
    fn is_registered(env: Env, name: String) -> bool;
    fn organization(env: Env) -> Address;
}

/// External voting authority
#[contractclient(name = "VotingMachineClient")]
pub trait VotingMachine {
    fn propose(
        env: Env,
        scheme: Address,
        administrator: Address,
        proposal_id: u64,
        voting_params: BytesN<32>,
        proposer: Address,
    );
}
