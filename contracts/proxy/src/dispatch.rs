//! Transparent dispatch.
//!
//! A call is classified by its caller alone: the admin only ever reaches the
//! admin functions, everyone else only ever reaches the implementation. The
//! admin therefore cannot call into the implementation through the proxy.

use soroban_sdk::{Address, Env};

use shared::{CallData, ContractError};

/// Functions the admin can reach through the generic `call` entry point
#[derive(Clone, Debug)]
pub enum AdminCall {
    Implementation,
    Admin,
    UpgradeTo(Address),
    UpgradeToAndCall(Address, CallData),
    ChangeAdmin(Address),
}

#[derive(Clone, Debug)]
pub enum Dispatch {
    Admin(AdminCall),
    Forward(CallData),
}

impl Dispatch {
    pub fn classify(
        env: &Env,
        admin: &Address,
        caller: &Address,
        call: CallData,
    ) -> Result<Dispatch, ContractError> {
        if caller != admin {
            return Ok(Dispatch::Forward(call));
        }
        AdminCall::decode(env, &call).map(Dispatch::Admin)
    }
}

impl AdminCall {
    /// Decode an admin-issued call. Anything outside the admin surface is
    /// `AdminCannotFallback`.
    pub fn decode(env: &Env, call: &CallData) -> Result<AdminCall, ContractError> {
        if call.is(env, "implementation") {
            Ok(AdminCall::Implementation)
        } else if call.is(env, "admin") {
            Ok(AdminCall::Admin)
        } else if call.is(env, "upgrade_to") {
            Ok(AdminCall::UpgradeTo(call.arg(env, 0)?))
        } else if call.is(env, "upgrade_to_and_call") {
            Ok(AdminCall::UpgradeToAndCall(call.arg(env, 0)?, call.arg(env, 1)?))
        } else if call.is(env, "change_admin") {
            Ok(AdminCall::ChangeAdmin(call.arg(env, 0)?))
        } else {
            Err(ContractError::AdminCannotFallback)
        }
    }
}
