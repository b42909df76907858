//! Common error types for the factory and registry contracts
//!
//! This module defines a unified set of error codes that are used across all
//! contracts in the workspace so a failure raised by one contract keeps its
//! meaning when it is observed through another contract's client.

use soroban_sdk::contracterror;

/// Comprehensive error type for the workspace contracts
///
/// Error ranges are organized by category:
/// - 1-19: General/Authorization errors
/// - 20-39: Factory errors (directory, package, app)
/// - 40-59: Proxy errors
/// - 60-79: Registry errors
/// - 80-99: Registry scheme errors
/// - 100-119: Component errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    // ===== General/Authorization Errors (1-19) =====
    /// Caller is not authorized to perform this action
    Unauthorized = 1,

    /// Requested entry (directory name, package, version, proposal...) not found
    NotFound = 2,

    /// Invalid input provided
    InvalidInput = 3,

    /// Contract not initialized
    NotInitialized = 4,

    /// Contract already initialized
    AlreadyInitialized = 5,

    /// Invalid state for operation
    InvalidState = 6,

    // ===== Factory Errors (20-39) =====
    /// Version already added to the package
    DuplicateVersion = 20,

    /// Null directory reference
    InvalidReference = 21,

    /// Version does not follow the package's ordering policy
    VersionNotIncreasing = 22,

    /// Directory no longer accepts implementation changes
    DirectoryFrozen = 23,

    /// Package, version, directory or contract name could not be resolved
    UnresolvedComponent = 24,

    /// Initializer call of a new instance failed
    InitializationFailed = 25,

    // ===== Proxy Errors (40-59) =====
    /// Migration call of an upgrade failed
    UpgradeRejected = 40,

    /// Proxy admin called a function that only exists on the implementation
    AdminCannotFallback = 41,

    /// Implementation could not be invoked
    DelegateCallFailed = 42,

    // ===== Registry Errors (60-79) =====
    /// Name is currently registered
    AlreadyRegistered = 60,

    // ===== Registry Scheme Errors (80-99) =====
    /// Proposal was already executed
    AlreadyExecuted = 80,

    /// Organization has no scheme parameters bound
    OrganizationNotConfigured = 81,

    /// Voting machine refused to open a ballot
    VotingMachineRejected = 82,

    // ===== Component Errors (100-119) =====
    /// Component does not expose the requested function
    UnknownFunction = 100,
}

impl ContractError {
    /// Get a human-readable error message
    pub fn message(&self) -> &'static str {
        match self {
            // General/Authorization
            ContractError::Unauthorized => "Caller is not authorized",
            ContractError::NotFound => "Entry not found",
            ContractError::InvalidInput => "Invalid input provided",
            ContractError::NotInitialized => "Contract not initialized",
            ContractError::AlreadyInitialized => "Contract already initialized",
            ContractError::InvalidState => "Invalid state for operation",

            // Factory
            ContractError::DuplicateVersion => "Version already exists",
            ContractError::InvalidReference => "Directory reference is null",
            ContractError::VersionNotIncreasing => "Version must be greater than the latest",
            ContractError::DirectoryFrozen => "Directory is frozen",
            ContractError::UnresolvedComponent => "Component could not be resolved",
            ContractError::InitializationFailed => "Instance initializer failed",

            // Proxy
            ContractError::UpgradeRejected => "Upgrade migration failed",
            ContractError::AdminCannotFallback => "Admin cannot call implementation functions",
            ContractError::DelegateCallFailed => "Implementation call failed",

            // Registry
            ContractError::AlreadyRegistered => "Name already registered",

            // Registry scheme
            ContractError::AlreadyExecuted => "Proposal already executed",
            ContractError::OrganizationNotConfigured => "Organization not configured",
            ContractError::VotingMachineRejected => "Voting machine rejected the proposal",

            // Component
            ContractError::UnknownFunction => "Unknown component function",
        }
    }
}
