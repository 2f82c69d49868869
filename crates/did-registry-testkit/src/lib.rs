//! Test utilities and fixtures for exercising the DID registry canister.
//!
//! Intended for host-side test environments (PocketIC). Provides stable dummy
//! principals and a thin typed wrapper over `PocketIc`.

pub mod pic;

use candid::Principal;

///
/// Deterministic dummy-value generator for tests.
///
/// Produces stable principals derived from a numeric seed, which makes tests
/// reproducible without hardcoding raw byte arrays.
///

pub struct Fake;

impl Fake {
    ///
    /// Deterministically derive a [`Principal`] from `seed`.
    ///
    #[must_use]
    pub fn principal(seed: u32) -> Principal {
        let mut buf = [0u8; 29];
        buf[..4].copy_from_slice(&seed.to_be_bytes());

        Principal::from_slice(&buf)
    }
}

///
/// TESTS
///
