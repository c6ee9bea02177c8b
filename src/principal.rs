//! Principal identities for the club registry
//!
//! Callers and admins are identified by Stacks-style string principals
//! (`ST…`/`SP…`). The burn address is the one reserved principal that can
//! never hold administrative rights.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The reserved burn address. Transfers of admin rights to this principal
/// are rejected by the contract.
pub const BURN_ADDRESS: &str = "SP000000000000000000002Q6VF78";

/// A caller or admin identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Principal(id.into())
    }

    /// The burn address principal.
    pub fn burn() -> Self {
        Principal(BURN_ADDRESS.to_string())
    }

    /// Whether this principal is the reserved burn address.
    pub fn is_burn(&self) -> bool {
        self.0 == BURN_ADDRESS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Principal(id.to_string())
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Principal(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_address_detection() {
        assert!(Principal::burn().is_burn());
        assert!(Principal::from(BURN_ADDRESS).is_burn());
        assert!(!Principal::from("STADMIN").is_burn());
    }

    #[test]
    fn test_display_roundtrip() {
        let p = Principal::from("STCLUB1");
        assert_eq!(p.to_string(), "STCLUB1");
        assert_eq!(p.as_str(), "STCLUB1");
    }
}
