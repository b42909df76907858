//! Validation helper utilities
//!
//! Reusable input checks so every contract rejects the same malformed names
//! and payloads with the same error.

use crate::constants::{MAX_CALL_ARGS, MAX_NAME_LENGTH};
use crate::errors::ContractError;
use crate::types::CallData;
use soroban_sdk::String;

// ===== Name Validation =====

/// Validate a package, contract or registry name
///
/// # Returns
/// `Ok(())` if the name is non-empty and at most `MAX_NAME_LENGTH` bytes,
/// `Err(ContractError::InvalidInput)` otherwise
pub fn validate_name(name: &String) -> Result<(), ContractError> {
    let len = name.len();
    if len == 0 || len > MAX_NAME_LENGTH {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

// ===== Payload Validation =====

/// Validate the shape of a call payload before it is handed to a component
pub fn validate_call(call: &CallData) -> Result<(), ContractError> {
    if call.args.len() > MAX_CALL_ARGS {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}
