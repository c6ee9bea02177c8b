//! Club registry state machine
//!
//! This module mirrors the observable behavior of the club registry contract:
//! clubs register with metadata, their admin can deactivate them or update
//! their metadata, and the contract admin role can be transferred. Each
//! operation either fully applies its effect or fails with one of the
//! contract's fixed error codes, leaving the state untouched.

use crate::error::{RegistryError, Result};
use crate::principal::Principal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata URIs shorter than this are rejected (code 103).
pub const MIN_METADATA_URI_LEN: usize = 5;

/// One registered club.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Club {
    /// Principal that registered the club; immutable after creation
    pub admin: Principal,

    /// Display name
    pub name: String,

    /// Opaque pointer to off-record metadata
    pub metadata_uri: String,

    /// Set to true on registration, cleared by deactivation
    pub is_active: bool,
}

/// The full registry state. Constructed fresh per session; there is no
/// shared or persisted instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubRegistry {
    /// Principal allowed to transfer the contract admin role
    contract_admin: Principal,

    /// Clubs keyed by their 1-based ID
    clubs: HashMap<u64, Club>,

    /// Most recently registered club per principal. Last write wins: a
    /// principal registering twice overwrites its own entry here, while
    /// both Club records remain in `clubs`.
    club_owners: HashMap<Principal, u64>,

    /// Highest assigned club ID, source of the next ID
    club_count: u64,
}

impl ClubRegistry {
    /// Create an empty registry controlled by the given contract admin.
    pub fn new(contract_admin: Principal) -> Self {
        ClubRegistry {
            contract_admin,
            clubs: HashMap::new(),
            club_owners: HashMap::new(),
            club_count: 0,
        }
    }

    /// Register a new club and return its ID.
    ///
    /// The caller becomes the club admin. IDs are assigned densely from 1
    /// and never reused.
    pub fn register_club(
        &mut self,
        caller: Principal,
        name: String,
        metadata_uri: String,
    ) -> Result<u64> {
        validate_metadata_uri(&metadata_uri)?;

        let new_id = self.club_count + 1;
        self.clubs.insert(
            new_id,
            Club {
                admin: caller.clone(),
                name,
                metadata_uri,
                is_active: true,
            },
        );
        self.club_owners.insert(caller.clone(), new_id);
        self.club_count = new_id;

        log::debug!("registered club {} for {}", new_id, caller);
        Ok(new_id)
    }

    /// Deactivate a club. Only its admin may do so.
    ///
    /// Idempotent: deactivating an already inactive club succeeds again.
    pub fn deactivate_club(&mut self, caller: &Principal, club_id: u64) -> Result<()> {
        let club = self
            .clubs
            .get_mut(&club_id)
            .ok_or(RegistryError::ClubNotFound(club_id))?;

        if club.admin != *caller {
            return Err(RegistryError::NotClubAdmin(club_id));
        }

        club.is_active = false;
        log::debug!("deactivated club {}", club_id);
        Ok(())
    }

    /// Replace a club's metadata URI. Only its admin may do so.
    ///
    /// Deactivated clubs accept metadata updates; the contract does not
    /// gate this on `is_active`.
    pub fn update_metadata(
        &mut self,
        caller: &Principal,
        club_id: u64,
        metadata_uri: String,
    ) -> Result<()> {
        validate_metadata_uri(&metadata_uri)?;

        let club = self
            .clubs
            .get_mut(&club_id)
            .ok_or(RegistryError::ClubNotFound(club_id))?;

        if club.admin != *caller {
            return Err(RegistryError::NotClubAdmin(club_id));
        }

        club.metadata_uri = metadata_uri;
        log::debug!("updated metadata for club {}", club_id);
        Ok(())
    }

    /// Transfer the contract admin role to another principal.
    pub fn transfer_admin(&mut self, caller: &Principal, new_admin: Principal) -> Result<()> {
        if *caller != self.contract_admin {
            return Err(RegistryError::NotContractAdmin);
        }
        if new_admin.is_burn() {
            return Err(RegistryError::BurnAddressAdmin);
        }

        log::debug!("contract admin: {} -> {}", self.contract_admin, new_admin);
        self.contract_admin = new_admin;
        Ok(())
    }

    /// Current contract admin.
    pub fn contract_admin(&self) -> &Principal {
        &self.contract_admin
    }

    /// Look up a club by ID.
    pub fn club(&self, club_id: u64) -> Option<&Club> {
        self.clubs.get(&club_id)
    }

    /// Highest assigned club ID (equals the number of registered clubs).
    pub fn club_count(&self) -> u64 {
        self.club_count
    }

    /// ID of the club a principal most recently registered, if any.
    pub fn latest_club_of(&self, owner: &Principal) -> Option<u64> {
        self.club_owners.get(owner).copied()
    }

    /// Iterate over all registered clubs.
    pub fn clubs(&self) -> impl Iterator<Item = (u64, &Club)> {
        self.clubs.iter().map(|(id, club)| (*id, club))
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }
}

fn validate_metadata_uri(uri: &str) -> Result<()> {
    if uri.len() < MIN_METADATA_URI_LEN {
        return Err(RegistryError::InvalidMetadataUri);
    }
    Ok(())
}
