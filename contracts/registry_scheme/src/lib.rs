#![no_std]
//! # Registry Scheme
//!
//! Governance scheme that puts DAO registry changes up to a vote.
//!
//! 1. Anyone stores a configuration `(voting params, voting machine,
//!    registry)` with `set_parameters`; it is addressed by its hash.
//! 2. An organization binds itself to a configuration with
//!    `configure_organization`.
//! 3. Members propose to register or unregister a name. Each proposal opens a
//!    ballot on the organization's voting machine.
//! 4. The voting machine reports the result through `execute_proposal`. A
//!    passing proposal is applied to the registry; everything else is
//!    discarded. Either way the proposal is consumed.
//!
//! Proposal ids are counted per organization, so organizations never see
//! each other's proposals.

use soroban_sdk::{
    contract, contractimpl, log, xdr::ToXdr, Address, BytesN, Env, String, Symbol,
};

use shared::{validate_name, ContractError, ExecutionResult, RegistryClient, VotingMachineClient};

mod storage;
mod types;


pub use types::{Proposal, ProposalKind, ProposalStatus, SchemeParameters};

#[contract]
pub struct RegistryScheme;

fn parameters_hash(
    env: &Env,
    voting_params: &BytesN<32>,
    voting_machine: &Address,
    registry: &Address,
) -> BytesN<32> {
    let encoded = (voting_params.clone(), voting_machine.clone(), registry.clone()).to_xdr(env);
    env.crypto().sha256(&encoded).to_bytes()
}

/// The registry must belong to `administrator`'s organization.
fn require_registry_of(env: &Env, registry: &Address, administrator: &Address) -> Result<(), ContractError> {
    match RegistryClient::new(env, registry).try_organization() {
        Ok(Ok(organization)) if organization == *administrator => Ok(()),
        _ => {
            log!(env, "registry not bound to organization", registry, administrator);
            Err(ContractError::Unauthorized)
        }
    }
}

/// Store a proposal for `administrator` and open its ballot.
fn submit(
    env: &Env,
    proposer: Address,
    administrator: Address,
    kind: ProposalKind,
    name: String,
    address: Address,
) -> Result<u64, ContractError> {
    proposer.require_auth();
    validate_name(&name)?;

    let params_hash =
        storage::get_organization(env, &administrator).ok_or(ContractError::OrganizationNotConfigured)?;
    let params = storage::get_parameters(env, &params_hash).ok_or(ContractError::NotFound)?;

    let id = storage::next_proposal_id(env, &administrator);
    let proposal = Proposal {
        kind,
        name: name.clone(),
        address: address.clone(),
        proposer: proposer.clone(),
        params_hash,
        created_at: env.ledger().timestamp(),
    };
    storage::set_proposal(env, &administrator, id, &proposal);
    storage::set_status(env, &administrator, id, &ProposalStatus::Pending);

    let opened = VotingMachineClient::new(env, &params.voting_machine).try_propose(
        &env.current_contract_address(),
        &administrator,
        &id,
        &params.voting_params,
        &proposer,
    );
    if !matches!(opened, Ok(Ok(()))) {
        return Err(ContractError::VotingMachineRejected);
    }

    let topic = match kind {
        ProposalKind::Register => "propose_to_register",
        ProposalKind::Unregister => "propose_to_unregister",
    };
    env.events().publish(
        (Symbol::new(env, topic), administrator, id),
        (address, name, params.voting_machine),
    );
    authorization::bump_instance(env);

    Ok(id)
}

#[contractimpl]
impl RegistryScheme {
    // ========== Configuration ==========

    /// Store a voting configuration and return its hash.
    pub fn set_parameters(
        env: Env,
        voting_params: BytesN<32>,
        voting_machine: Address,
        registry: Address,
    ) -> BytesN<32> {
        let hash = parameters_hash(&env, &voting_params, &voting_machine, &registry);
        let params = SchemeParameters {
            voting_params,
            voting_machine,
            registry,
        };
        storage::set_parameters(&env, &hash, &params);

        env.events()
            .publish((Symbol::new(&env, "params_set"),), hash.clone());

        hash
    }

    pub fn get_parameters_hash(
        env: Env,
        voting_params: BytesN<32>,
        voting_machine: Address,
        registry: Address,
    ) -> BytesN<32> {
        parameters_hash(&env, &voting_params, &voting_machine, &registry)
    }

    pub fn parameters(env: Env, params_hash: BytesN<32>) -> Result<SchemeParameters, ContractError> {
        storage::get_parameters(&env, &params_hash).ok_or(ContractError::NotFound)
    }

    /// Bind `administrator`'s organization to a stored configuration.
    /// Proposals already made keep the configuration they were made under.
    ///
    /// The configuration's registry must have been initialized for
    /// `administrator`; otherwise `Unauthorized`.
    pub fn configure_organization(
        env: Env,
        administrator: Address,
        params_hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        administrator.require_auth();
        let params = storage::get_parameters(&env, &params_hash).ok_or(ContractError::NotFound)?;
        require_registry_of(&env, &params.registry, &administrator)?;
        storage::set_organization(&env, &administrator, &params_hash);

        env.events().publish(
            (Symbol::new(&env, "org_configured"), administrator),
            params_hash,
        );

        Ok(())
    }

    pub fn organization_parameters(env: Env, administrator: Address) -> Result<BytesN<32>, ContractError> {
        storage::get_organization(&env, &administrator).ok_or(ContractError::OrganizationNotConfigured)
    }

    // ========== Proposals ==========

    pub fn propose_to_register(
        env: Env,
        proposer: Address,
        administrator: Address,
        name: String,
        address: Address,
    ) -> Result<u64, ContractError> {
        submit(&env, proposer, administrator, ProposalKind::Register, name, address)
    }

    pub fn propose_to_unregister(
        env: Env,
        proposer: Address,
        administrator: Address,
        address: Address,
        name: String,
    ) -> Result<u64, ContractError> {
        submit(&env, proposer, administrator, ProposalKind::Unregister, name, address)
    }

    pub fn proposals(env: Env, administrator: Address, proposal_id: u64) -> Result<Proposal, ContractError> {
        storage::get_proposal(&env, &administrator, proposal_id).ok_or(ContractError::NotFound)
    }

    pub fn proposal_status(
        env: Env,
        administrator: Address,
        proposal_id: u64,
    ) -> Result<ProposalStatus, ContractError> {
        storage::get_status(&env, &administrator, proposal_id).ok_or(ContractError::NotFound)
    }

    /// Number of proposals made in `administrator`'s organization
    pub fn proposal_count(env: Env, administrator: Address) -> u64 {
        storage::get_proposal_count(&env, &administrator)
    }

    // ========== Execution ==========

    /// Callback for the voting machine once a ballot concludes.
    ///
    /// Only the voting machine named in the proposal's configuration may
    /// call it, and only once per proposal. The registry must still belong to
    /// the proposal's organization.
    pub fn execute_proposal(
        env: Env,
        voting_machine: Address,
        result: ExecutionResult,
    ) -> Result<ProposalStatus, ContractError> {
        voting_machine.require_auth();
        let administrator = result.administrator;
        let id = result.proposal_id;

        let proposal = storage::get_proposal(&env, &administrator, id).ok_or(ContractError::NotFound)?;
        let params = storage::get_parameters(&env, &proposal.params_hash).ok_or(ContractError::NotFound)?;
        if params.voting_machine != voting_machine {
            return Err(ContractError::Unauthorized);
        }
        require_registry_of(&env, &params.registry, &administrator)?;
        if storage::get_status(&env, &administrator, id) != Some(ProposalStatus::Pending) {
            return Err(ContractError::AlreadyExecuted);
        }

        let status = if result.passed {
            let registry = RegistryClient::new(&env, &params.registry);
            let applied = match proposal.kind {
                ProposalKind::Register => registry.try_register(&proposal.address, &proposal.name),
                ProposalKind::Unregister => registry.try_un_register(&proposal.address, &proposal.name),
            };
            if matches!(applied, Ok(Ok(()))) {
                ProposalStatus::Applied
            } else {
                log!(&env, "registry refused proposal", administrator, id);
                ProposalStatus::Discarded
            }
        } else {
            ProposalStatus::Discarded
        };

        storage::set_status(&env, &administrator, id, &status);
        env.events().publish(
            (Symbol::new(&env, "proposal_executed"), administrator, id),
            (result.passed, status),
        );

        Ok(status)
    }
}
