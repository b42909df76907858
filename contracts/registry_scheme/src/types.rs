use soroban_sdk::{contracttype, Address, BytesN, String};

/// Voting configuration, stored under its hash
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemeParameters {
    /// Opaque parameters hash understood by the voting machine
    pub voting_params: BytesN<32>,
    pub voting_machine: Address,
    pub registry: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalKind {
    Register,
    Unregister,
}

/// A proposal record. Immutable once created; its outcome is tracked
/// separately in [`ProposalStatus`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub kind: ProposalKind,
    pub name: String,
    pub address: Address,
    pub proposer: Address,
    /// Configuration in force when the proposal was made
    pub params_hash: BytesN<32>,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    /// Waiting for the voting machine
    Pending,
    /// Passed and applied to the registry
    Applied,
    /// Rejected by vote, or the registry refused the change
    Discarded,
}
