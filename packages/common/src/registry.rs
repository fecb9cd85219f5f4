//! Query interface of the eco-credit token registry.
//!
//! The registry is an external collaborator: it decides whether a token
//! contract is a recognized eco-credit instance and whether it is eligible
//! under the destination pool's policy. The bridge only consumes these two
//! queries; issuance and custody of the tokens themselves stay with the
//! token contracts.

use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
#[derive(QueryResponses)]
pub enum RegistryQueryMsg {
    /// Is this address a recognized, transferable eco-credit token contract?
    #[returns(IsAllowedResponse)]
    IsAllowed { token: String },
    /// Is this token accepted under the destination pool's policy
    /// (methodology, category)?
    #[returns(IsEligibleResponse)]
    IsEligible { token: String },
}

#[cw_serde]
pub struct IsAllowedResponse {
    pub allowed: bool,
}

#[cw_serde]
pub struct IsEligibleResponse {
    pub eligible: bool,
}
