use cosmwasm_schema::cw_serde;

/// Queries are the shared registry interface the bridge consumes.
pub use common::registry::RegistryQueryMsg as QueryMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Admin allowed to register tokens
    pub admin: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a token contract, with its pool eligibility
    RegisterToken { token: String, eligible: bool },
    /// Change the pool eligibility of a registered token
    SetEligibility { token: String, eligible: bool },
    /// Drop a token from the registry
    DeregisterToken { token: String },
}
