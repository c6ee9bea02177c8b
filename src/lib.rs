//! ClubRegistry - In-memory mock of the club registry smart contract
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Core Registry
//! - [`registry`] - Registry state machine and transition rules
//! - [`principal`] - Caller/admin identities and the burn address
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types and contract error codes

#![forbid(unsafe_code)]

// ============================================================================
// Core Registry
// ============================================================================
pub mod principal;
pub mod registry;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod config;
pub mod error;
