//! Common constants used across the contracts
//!
//! Storage lifetimes and validation limits shared by every contract so that
//! entries written by one component never expire before the entries that
//! reference them.

// ===== Ledger TTL Constants =====
// ~5s per ledger.

/// Ledgers per day
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage is extended to this many ledgers on every write
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

/// Instance storage is extended once its TTL drops below this
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Persistent entries (versions, bindings, registry entries, proposals)
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Persistent entries are extended once their TTL drops below this
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ===== Validation Limits =====

/// Maximum length of a package, contract or registry name
pub const MAX_NAME_LENGTH: u32 = 64;

/// Maximum number of arguments carried by a single call payload
pub const MAX_CALL_ARGS: u32 = 16;

// ===== Proposal Constants =====

/// First proposal id allocated in every administrator namespace
pub const FIRST_PROPOSAL_ID: u64 = 1;
