//! Registry Mock - Configurable Eco-Credit Registry
//!
//! Stands in for the external eco-credit registry in tests: an admin
//! registers token contracts and flags their pool eligibility, and the
//! contract answers the shared [`common::registry::RegistryQueryMsg`]
//! interface the bridge consumes. It carries no bridge invariants.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
