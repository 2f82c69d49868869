//! Candid-facing data transfer types.
//!
//! Everything here crosses the canister boundary, so field changes are
//! interface changes.

pub mod did;
pub mod error;
pub mod journal;
pub mod page;
pub mod state;

///
/// PRELUDE
///

pub mod prelude {
    pub use candid::{CandidType, Principal};
    pub use serde::{Deserialize, Serialize};
}
