//! Error taxonomy of the bridge contract.
//!
//! Every variant is terminal for the call that raised it; the hosting chain
//! rolls back all state on error. Relayers rely on the variants to tell
//! retry-worthy conditions (`Paused`) from permanent ones
//! (`DuplicateOrigin`, `InsufficientLiability`), so messages stay stable.

use common::AddressError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Address(#[from] AddressError),

    #[error("unauthorized")]
    Unauthorized,

    #[error("only the token issuer can issue tokens")]
    InvalidCaller,

    #[error("bridge is paused")]
    Paused,

    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("token {token} is not part of the eco-credit registry")]
    TokenNotRecognized { token: String },

    #[error("token {token} is not accepted by the destination pool policy")]
    TokenNotEligible { token: String },

    #[error(
        "amount {amount} is finer than the {max_decimals}-decimal precision of the settlement chain"
    )]
    PrecisionTooFine { amount: Uint128, max_decimals: u8 },

    #[error("cannot release {requested} of token {token}: outstanding liability is {available}")]
    InsufficientLiability {
        token: String,
        requested: Uint128,
        available: Uint128,
    },

    #[error("origin tuple has already been processed")]
    DuplicateOrigin,

    #[error("token issuer has already been rotated")]
    AlreadySet,
}
