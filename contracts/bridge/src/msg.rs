//! Message definitions for the carbon bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for contract management
    pub owner: String,
    /// Initial token issuer (may be rotated once by the owner)
    pub token_issuer: String,
    /// Eco-credit registry contract
    pub registry: String,
    /// Human-readable prefix of settlement-chain addresses, without the
    /// separator (e.g. "regen")
    pub settlement_prefix: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Outbound lock: eco-credit tokens arrive via the cw20 send hook with
    /// an embedded [`ReceiveMsg::Bridge`]
    Receive(Cw20ReceiveMsg),
    /// Inbound release, callable only by the token issuer after the
    /// corresponding credits were returned on the settlement chain
    IssueTokens {
        /// Sender address on the settlement chain
        origin: String,
        /// Recipient on this chain
        recipient: String,
        /// Token contract to release from custody
        token: String,
        amount: Uint128,
        /// Caller-supplied reference; part of the replay-protection key
        note: String,
    },
    /// Halt both bridge directions (pauser or owner)
    Pause {},
    /// Resume both bridge directions (pauser or owner)
    Unpause {},
    /// Grant the pauser capability (owner only)
    GrantPauser { address: String },
    /// Revoke the pauser capability (owner only)
    RevokePauser { address: String },
    /// Rotate the token issuer (owner only, one-time)
    SetTokenIssuer { new_issuer: String },
}

/// Payload of the cw20 send hook
#[cw_serde]
pub enum ReceiveMsg {
    /// Lock the received amount for `recipient` on the settlement chain
    Bridge { recipient: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(TotalTransferredResponse)]
    TotalTransferred {},
    #[returns(LiabilityResponse)]
    Liability { token: String },
    #[returns(LiabilitiesResponse)]
    Liabilities {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(OriginProcessedResponse)]
    OriginProcessed {
        origin: String,
        recipient: String,
        token: String,
        amount: Uint128,
        note: String,
    },
    #[returns(PausersResponse)]
    Pausers {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token_issuer: Addr,
    pub issuer_rotated: bool,
    pub registry: Addr,
    pub settlement_prefix: String,
    pub paused: bool,
}

#[cw_serde]
pub struct TotalTransferredResponse {
    pub total: Uint128,
}

#[cw_serde]
pub struct LiabilityResponse {
    pub token: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct LiabilitiesResponse {
    pub liabilities: Vec<LiabilityResponse>,
}

#[cw_serde]
pub struct OriginProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct PausersResponse {
    pub pausers: Vec<Addr>,
}
