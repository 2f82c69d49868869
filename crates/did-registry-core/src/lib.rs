//! Core library of the DID document registry canister.
//!
//! The registry maps a DID string to an opaque document. Documents are
//! mutated only by their controller; the registry itself has a single owner.
//! State lives in stable memory so the canister can be upgraded in place
//! without losing entries or changing its canister id.
//!
//! ## Layering
//!
//! - `access/` contains the owner/controller authorization rules.
//! - `workflow/` composes access, ops and logging into registry operations.
//! - `ops/` enforces the lifecycle state machine and storage invariants.
//! - `storage/` owns the stable-memory layout and raw records.
//! - `api/` is the boundary: it maps internal errors to [`PublicError`].
//! - `config/` holds the TOML configuration embedded at build time.
//!
//! The default flow is: endpoints → api → workflow → (access, ops) → storage.

pub mod access;
pub mod api;
pub mod dto;
pub mod error;
pub mod ids;
pub mod log;

pub(crate) mod config;
pub(crate) mod ops;
pub(crate) mod storage;
pub(crate) mod workflow;

pub use {
    ::did_registry_cdk as cdk,
    ::did_registry_memory as memory,
    ::did_registry_memory::{ic_memory, ic_memory_range, impl_storable_unbounded},
};

pub use dto::error::Error as PublicError;
pub use error::Error;
pub use thiserror::Error as ThisError;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse and validate a registry config without installing it.
///
/// Canister build scripts call this so a bad config fails the build instead
/// of the install.
pub fn validate_config(toml: &str) -> Result<(), String> {
    config::Config::parse_toml(toml)
        .map(|_| ())
        .map_err(|err| err.to_string())
}
