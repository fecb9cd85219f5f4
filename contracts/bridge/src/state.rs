//! State definitions for the carbon bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_vec, Addr, StdResult, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address for contract management
    pub owner: Addr,
    /// Identity trusted to attest settlement-chain deposits and issue
    /// tokens back on this chain
    pub token_issuer: Addr,
    /// Whether the one-time issuer rotation has been spent
    pub issuer_rotated: bool,
    /// Eco-credit registry consulted on every lock
    pub registry: Addr,
    /// Human-readable prefix of settlement-chain addresses (without the
    /// separator, e.g. "regen")
    pub settlement_prefix: String,
    /// Whether the bridge is currently paused
    pub paused: bool,
}

/// Replay-protection key for inbound releases.
///
/// All caller-supplied fields participate; dropping any of them would let a
/// distinct release collide with an already-processed one.
#[cw_serde]
pub struct OriginKey {
    /// Sender address on the settlement chain
    pub origin: String,
    /// Recipient on this chain
    pub recipient: String,
    /// Token contract being released
    pub token: String,
    /// Amount being released
    pub amount: Uint128,
    /// Caller-supplied note or reference
    pub note: String,
}

impl OriginKey {
    /// Canonical storage key: the JSON encoding of the full tuple. Field
    /// order is fixed by the struct definition, so the key is deterministic
    /// and a `note` containing separators cannot forge another tuple.
    pub fn storage_key(&self) -> StdResult<Vec<u8>> {
        to_json_vec(self)
    }
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:carbon-bridge";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal precision supported by the settlement chain. Amounts carrying a
/// finer-grained remainder are rejected, never truncated.
pub const SETTLEMENT_DECIMALS: u8 = 6;

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Granted pauser capabilities
/// Key: holder address, Value: whether active
pub const PAUSERS: Map<&Addr, bool> = Map::new("pausers");

/// Outstanding liability per token: amount locked on this chain awaiting
/// release, entries created implicitly at zero
/// Key: token contract address, Value: outstanding amount
pub const LIABILITIES: Map<&Addr, Uint128> = Map::new("liabilities");

/// Sum of all liabilities, kept in step with every lock and release
pub const TOTAL_TRANSFERRED: Item<Uint128> = Item::new("total_transferred");

/// Processed inbound origin tuples (to prevent replayed releases)
/// Key: canonical OriginKey encoding, Value: whether processed
pub const PROCESSED_ORIGINS: Map<&[u8], bool> = Map::new("processed_origins");
