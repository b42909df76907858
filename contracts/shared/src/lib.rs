#![no_std]
//! # Shared Contracts Library
//!
//! Reusable types, errors, constants, validation helpers and cross-contract
//! interfaces for the component factory and the DAO registry contracts.
//!
//! ## Modules
//!
//! - `errors` - Common error type used by every contract
//! - `types` - Versions, call payloads and governance messages
//! - `constants` - Storage TTLs and validation limits
//! - `validation` - Reusable validation helper functions
//! - `interfaces` - `#[contractclient]` traits for cross-contract calls
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::types::{CallData, Version};
//! use shared::interfaces::ComponentClient;
//! ```

pub mod constants;
pub mod errors;
pub mod interfaces;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use errors::ContractError;
pub use interfaces::{
    ComponentClient, ImplementationProviderClient, PackageClient, ProxyClient, RegistryClient,
    VotingMachineClient,
};
pub use types::{null_hash, CallData, ExecutionResult, Outcome, Version, VersionEntry};
pub use validation::{validate_call, validate_name};
