//! Common types and data structures
//!
//! Types that cross contract boundaries: semantic versions, the call payload
//! handed to components, the result a component returns to a proxy, and the
//! execution message a voting machine sends to a scheme.

use soroban_sdk::{contracttype, Address, BytesN, Env, Map, Symbol, TryFromVal, Val, Vec};

use crate::errors::ContractError;

// ===== Versioning =====

/// Semantic version triple
///
/// Ordering is lexicographic on (major, minor, patch).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }
}

/// A version entry of a package
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionEntry {
    /// Implementation directory for this version line
    pub directory: Address,
    /// Integrity tag of the directory snapshot; all zeroes means unchecked
    pub content_hash: BytesN<32>,
    /// Timestamp when the version was added
    pub added_at: u64,
}

impl VersionEntry {
    pub fn is_unchecked(&self, env: &Env) -> bool {
        self.content_hash == null_hash(env)
    }
}

/// The all-zero content hash
pub fn null_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

// ===== Component Calls =====

/// An encoded call to a component function.
///
/// Used as initializer payload, migration payload and forwarded proxy call.
/// Argument encoding is defined by the target component.
#[contracttype]
#[derive(Clone, Debug)]
pub struct CallData {
    pub function: Symbol,
    pub args: Vec<Val>,
}

impl CallData {
    pub fn new(env: &Env, function: &str, args: Vec<Val>) -> Self {
        CallData {
            function: Symbol::new(env, function),
            args,
        }
    }

    /// Call without arguments
    pub fn bare(env: &Env, function: &str) -> Self {
        Self::new(env, function, Vec::new(env))
    }

    pub fn is(&self, env: &Env, function: &str) -> bool {
        self.function == Symbol::new(env, function)
    }

    /// Decode argument `index`; missing or mistyped arguments are `InvalidInput`.
    pub fn arg<T>(&self, env: &Env, index: u32) -> Result<T, ContractError>
    where
        T: TryFromVal<Env, Val>,
    {
        let raw = self.args.get(index).ok_or(ContractError::InvalidInput)?;
        T::try_from_val(env, &raw).map_err(|_| ContractError::InvalidInput)
    }
}

/// Result of running a component function against a proxy's storage
#[contracttype]
#[derive(Clone, Debug)]
pub struct Outcome {
    /// Complete storage of the instance after the call
    pub storage: Map<Symbol, Val>,
    /// Return value of the call
    pub output: Val,
}

// ===== Governance =====

/// Message sent by a voting machine once a ballot concludes
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionResult {
    pub administrator: Address,
    pub proposal_id: u64,
    pub passed: bool,
}
