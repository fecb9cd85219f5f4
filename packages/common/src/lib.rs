//! Shared types for the carbon bridge contracts.
//!
//! The bridge contract and its external collaborators agree on two things:
//! the query interface of the eco-credit registry, and the format rules for
//! settlement-chain addresses. Both live here so that off-chain tooling can
//! depend on them without pulling in the contract itself.

pub mod address;
pub mod registry;

pub use crate::address::{validate_settlement_address, AddressError};
