//! Settlement-chain address validation.
//!
//! The settlement chain is only ever referenced through bech32-style address
//! strings; this module enforces its format rules without talking to it.
//! The checks are pure and deterministic so they can be exercised directly
//! in tests, outside any contract environment.

use thiserror::Error;

/// Separator between the human-readable prefix and the data part.
pub const PREFIX_SEPARATOR: char = '1';

/// Length of a settlement-chain account address, prefix included.
pub const ACCOUNT_ADDRESS_LENGTH: usize = 44;

/// Length of the longer key-hash encoding, prefix included.
pub const EXTENDED_ADDRESS_LENGTH: usize = 64;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with '{expected}'")]
    WrongPrefix { expected: String },

    #[error(
        "address must be {ACCOUNT_ADDRESS_LENGTH} or {EXTENDED_ADDRESS_LENGTH} characters long, got {actual}"
    )]
    WrongLength { actual: usize },

    #[error("address contains non-alphanumeric character '{character}'")]
    NonAlphanumeric { character: char },
}

/// Checks that `address` is a well-formed settlement-chain address for the
/// given human-readable `prefix` (without the separator, e.g. `"regen"`).
///
/// Rules are applied in order and the first violation is reported:
/// 1. the address starts with `<prefix>1`;
/// 2. its total length is exactly 44 or 64 characters;
/// 3. every character after the prefix and separator is alphanumeric.
pub fn validate_settlement_address(address: &str, prefix: &str) -> Result<(), AddressError> {
    let expected = format!("{prefix}{PREFIX_SEPARATOR}");
    if !address.starts_with(&expected) {
        return Err(AddressError::WrongPrefix { expected });
    }

    let length = address.chars().count();
    if length != ACCOUNT_ADDRESS_LENGTH && length != EXTENDED_ADDRESS_LENGTH {
        return Err(AddressError::WrongLength { actual: length });
    }

    if let Some(character) = address[expected.len()..]
        .chars()
        .find(|c| !c.is_ascii_alphanumeric())
    {
        return Err(AddressError::NonAlphanumeric { character });
    }

    Ok(())
}
