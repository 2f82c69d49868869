//! Public API façade for canister endpoints.
//!
//! Thin wrappers called from the canister's `#[update]` / `#[query]`
//! functions. They translate calls into workflow calls and map internal
//! errors into [`PublicError`]. No orchestration lives here.
//!
//! The caller is passed in explicitly so the whole surface can be driven
//! from host tests.

pub mod error;
pub mod lifecycle;
pub mod registry;
