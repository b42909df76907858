use soroban_sdk::{contracttype, Address, BytesN, Env};

use shared::constants::{
    FIRST_PROPOSAL_ID, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};

use crate::types::{Proposal, ProposalStatus, SchemeParameters};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Parameters(BytesN<32>),
    /// Parameters hash an organization votes with
    Organization(Address),
    /// Number of proposals issued in an organization's namespace
    ProposalCount(Address),
    Proposal(Address, u64),
    Status(Address, u64),
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn set<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    bump(env, key);
}

// ── Parameters ───────────────────────────────────────────────────────────────

pub fn set_parameters(env: &Env, hash: &BytesN<32>, params: &SchemeParameters) {
    set(env, &DataKey::Parameters(hash.clone()), params);
}

pub fn get_parameters(env: &Env, hash: &BytesN<32>) -> Option<SchemeParameters> {
    env.storage()
        .persistent()
        .get(&DataKey::Parameters(hash.clone()))
}

pub fn set_organization(env: &Env, administrator: &Address, hash: &BytesN<32>) {
    set(env, &DataKey::Organization(administrator.clone()), hash);
}

pub fn get_organization(env: &Env, administrator: &Address) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::Organization(administrator.clone()))
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env, administrator: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalCount(administrator.clone()))
        .unwrap_or(0)
}

/// Allocate the next id in `administrator`'s namespace.
pub fn next_proposal_id(env: &Env, administrator: &Address) -> u64 {
    let count = get_proposal_count(env, administrator);
    set(env, &DataKey::ProposalCount(administrator.clone()), &(count + 1));
    FIRST_PROPOSAL_ID + count
}

pub fn set_proposal(env: &Env, administrator: &Address, id: u64, proposal: &Proposal) {
    set(env, &DataKey::Proposal(administrator.clone(), id), proposal);
}

pub fn get_proposal(env: &Env, administrator: &Address, id: u64) -> Option<Proposal> {
    let key = DataKey::Proposal(administrator.clone(), id);
    let proposal = env.storage().persistent().get(&key);
    if proposal.is_some() {
        bump(env, &key);
    }
    proposal
}

pub fn set_status(env: &Env, administrator: &Address, id: u64, status: &ProposalStatus) {
    set(env, &DataKey::Status(administrator.clone(), id), status);
}

pub fn get_status(env: &Env, administrator: &Address, id: u64) -> Option<ProposalStatus> {
    env.storage()
        .persistent()
        .get(&DataKey::Status(administrator.clone(), id))
}
