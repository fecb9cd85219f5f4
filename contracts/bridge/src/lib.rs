//! Carbon Bridge Contract - Two-Way Eco-Credit Bridging
//!
//! This contract lets carbon-credit tokens minted on this chain be redeemed
//! for, and re-issued from, a representation on the settlement chain.
//!
//! # Flow
//! 1. A holder locks eco-credit tokens by sending them to this contract
//!    with a settlement-chain recipient address
//! 2. The token issuer (an off-chain relayer) observes the lock and has the
//!    equivalent credits issued on the settlement chain
//!
//! # Reverse Flow
//! 1. Credits are returned on the settlement chain
//! 2. The token issuer attests the return and calls this contract
//! 3. This contract releases the locked tokens to a local recipient
//!
//! # Security
//! - Per-token outstanding-liability accounting; a release can never exceed
//!   what was locked for that token
//! - Full origin-tuple tracking to prevent replayed releases
//! - Emergency pause functionality gating both directions

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
