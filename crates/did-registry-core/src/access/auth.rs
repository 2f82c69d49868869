use crate::{Error, ThisError, access::AccessError, ids::Did};
use candid::Principal;

///
/// AuthError
///
/// Each variant captures the principal that failed a rule, so the Warn log
/// line and the public message both say who was rejected.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum AuthError {
    #[error("the anonymous principal cannot modify the registry")]
    Anonymous,

    #[error("caller '{caller}' is not the controller of '{did}'")]
    NotController { caller: Principal, did: Did },

    #[error("caller '{0}' is not the registry owner")]
    NotOwner(Principal),
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        AccessError::Auth(err).into()
    }
}

/// Reject the anonymous principal.
pub fn require_authenticated(caller: Principal) -> Result<(), AuthError> {
    if caller == Principal::anonymous() {
        return Err(AuthError::Anonymous);
    }

    Ok(())
}

/// Caller must be the registry owner.
///
/// `owner == None` only happens before initialization, in which case nobody
/// is the owner.
pub fn require_owner(caller: Principal, owner: Option<Principal>) -> Result<(), AuthError> {
    require_authenticated(caller)?;

    match owner {
        Some(owner) if owner == caller => Ok(()),
        _ => Err(AuthError::NotOwner(caller)),
    }
}

/// Caller must be the recorded controller of `did`.
pub fn require_controller(
    caller: Principal,
    did: &Did,
    controller: Principal,
) -> Result<(), AuthError> {
    require_authenticated(caller)?;

    if caller != controller {
        return Err(AuthError::NotController {
            caller,
            did: did.clone(),
        });
    }

    Ok(())
}

///
/// TESTS
///
