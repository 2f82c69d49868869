//! Lifecycle rules over stable storage.
//!
//! Ops functions enforce the DID state machine (Absent / Active / Deleted),
//! keep the counters consistent with the entries, and own the journal
//! sequence. They never look at the caller; authorization is the job of
//! `access` and ordering the job of `workflow`.

pub mod journal;
pub mod registry;
pub mod state;

use crate::ThisError;
use candid::Principal;

///
/// OpsError
/// Error envelope shared across ops submodules
///

#[derive(Debug, ThisError)]
pub enum OpsError {
    #[error(transparent)]
    Registry(#[from] registry::RegistryOpsError),

    #[error(transparent)]
    State(#[from] state::StateOpsError),
}

/// Whether `p` may hold a role (owner or controller).
///
/// The anonymous principal would let anyone act, and the management canister
/// never calls back into the registry, so both are refused.
pub(crate) fn is_assignable(p: Principal) -> bool {
    p != Principal::anonymous() && p != Principal::management_canister()
}
