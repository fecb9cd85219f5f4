use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:registry-mock";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Admin allowed to register tokens
pub const ADMIN: Item<Addr> = Item::new("admin");

/// Registered token contracts
/// Key: token contract address, Value: whether eligible under the pool policy
pub const TOKENS: Map<&Addr, bool> = Map::new("tokens");
