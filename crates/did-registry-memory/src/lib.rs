//! Stable-memory utilities shared by the registry crates.
//!
//! This crate hosts the shared memory manager, the memory-id registry
//! (range reservation and duplicate detection), the CBOR codec used by every
//! stored record, and the `ic_memory!` / `ic_memory_range!` /
//! `impl_storable_unbounded!` macros.
//!
//! Memory ids are the storage layout of a canister: stable memory survives an
//! upgrade, so an id must keep addressing the same structure for the life of
//! the canister. The registry exists to make a collision fail loudly at
//! install/upgrade time instead of silently aliasing two structures.

pub mod macros;
pub mod manager;
pub mod registry;
pub mod runtime;
pub mod serialize;

pub use ::did_registry_cdk as cdk;

pub use manager::MEMORY_MANAGER;
pub use thiserror::Error as ThisError;
