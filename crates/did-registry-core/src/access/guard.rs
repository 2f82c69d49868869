use crate::{
    Error,
    access::auth::{self, AuthError},
    ids::Did,
    log,
    log::Topic,
    storage::stable::{controller::DidControllers, state::RegistryState},
};
use candid::Principal;

/// Reject the anonymous principal for a mutation.
pub(crate) fn authenticated(caller: Principal) -> Result<(), Error> {
    auth::require_authenticated(caller).map_err(|err| denied(err, Topic::Access))
}

/// Caller must be the current registry owner.
pub(crate) fn owner(caller: Principal) -> Result<(), Error> {
    auth::require_owner(caller, RegistryState::owner()).map_err(|err| denied(err, Topic::Ownership))
}

/// Caller must be the recorded controller of `did`.
///
/// Callers check existence first; an Active DID without a controller entry
/// is a broken invariant, not an authorization failure.
pub(crate) fn controller(caller: Principal, did: &Did) -> Result<(), Error> {
    let Some(controller) = DidControllers::get(did) else {
        return Err(crate::ops::registry::RegistryOpsError::ControllerMissing(did.clone()).into());
    };

    auth::require_controller(caller, did, controller).map_err(|err| denied(err, Topic::Access))
}

fn denied(err: AuthError, topic: Topic) -> Error {
    log!(topic, Warn, "access denied: {err}");

    err.into()
}

///
/// TESTS
///
