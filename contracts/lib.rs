#![no_std]
//! Versioned component factory and governance-gated DAO registry
//!
//! Umbrella crate re-exporting the contracts of the workspace, grouped by
//! concern. Each contract also builds to its own wasm from its own crate.

/// Owner gating shared by every owned contract
/// Import like: use dao_contracts::authorization::*;
pub mod authorization {
    pub use authorization::{
        bump_instance, get_owner, has_owner, initialize_owner, is_owner, require_owner,
        transfer_ownership, OwnerKey,
    };
}

/// Versioned lookup and instance creation
pub mod factory {
    pub use app::{App, AppClient, PackageBinding};
    pub use implementation_directory::{ImplementationDirectory, ImplementationDirectoryClient};
    pub use component_package::{Package, PackageClient, VersionPolicy};
}

/// Stable addresses in front of replaceable components
pub mod upgradeability {
    pub use proxy::{AdminCall, AdminUpgradeabilityProxy, AdminUpgradeabilityProxyClient, Dispatch};
    pub use proxy_admin::{ProxyAdmin, ProxyAdminClient};
}

/// Name registry and the scheme that governs it
pub mod governance {
    pub use dao_registry::{DaoRegistry, DaoRegistryClient, RegistrationStatus, RegistryEntry};
    pub use registry_scheme::{
        Proposal, ProposalKind, ProposalStatus, RegistryScheme, RegistrySchemeClient,
        SchemeParameters,
    };
}

/// Component implementations run behind proxies
pub mod components {
    pub use avatar::Avatar;
    pub use avatar_v2::AvatarV2;
}

pub use shared::{
    constants, errors, interfaces, null_hash, CallData, ContractError, ExecutionResult, Outcome,
    Version, VersionEntry,
};
