//! Error types for ClubRegistry
//!
//! Every failure the registry can report maps to one of the fixed error
//! codes the on-chain contract uses, so callers branching on codes behave
//! identically against the mock and the real contract.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not the contract admin (code 100)
    NotContractAdmin,
    /// No club registered under the given ID (code 102)
    ClubNotFound(u64),
    /// Metadata URI failed validation (code 103)
    InvalidMetadataUri,
    /// Caller is not the admin of the club (code 104)
    NotClubAdmin(u64),
    /// Admin rights may not be transferred to the burn address (code 105)
    BurnAddressAdmin,
}

impl RegistryError {
    /// The contract-level error code for this failure.
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::NotContractAdmin => 100,
            RegistryError::ClubNotFound(_) => 102,
            RegistryError::InvalidMetadataUri => 103,
            RegistryError::NotClubAdmin(_) => 104,
            RegistryError::BurnAddressAdmin => 105,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegistryError::NotContractAdmin => {
                write!(f, "err u100: caller is not the contract admin")
            }
            RegistryError::ClubNotFound(id) => write!(f, "err u102: club {} not found", id),
            RegistryError::InvalidMetadataUri => write!(f, "err u103: invalid metadata URI"),
            RegistryError::NotClubAdmin(id) => {
                write!(f, "err u104: caller is not the admin of club {}", id)
            }
            RegistryError::BurnAddressAdmin => {
                write!(f, "err u105: new admin cannot be the burn address")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, RegistryError>;
