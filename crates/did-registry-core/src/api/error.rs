use crate::{
    Error,
    access::AccessError,
    dto::error::{Error as PublicError, ErrorCode},
    ops::{OpsError, registry::RegistryOpsError, state::StateOpsError},
};

impl Error {
    #[must_use]
    pub fn public(&self) -> PublicError {
        match self {
            // ---------------------------------------------------------
            // Access / authorization
            // ---------------------------------------------------------
            Self::Access(err) => access_error(err),

            // ---------------------------------------------------------
            // Configuration
            // ---------------------------------------------------------
            Self::Config(err) => PublicError::internal(format!("invalid configuration: {err}")),

            // ---------------------------------------------------------
            // Lifecycle rules
            // ---------------------------------------------------------
            Self::Ops(OpsError::Registry(err)) => registry_error(err),
            Self::Ops(OpsError::State(err)) => state_error(err),

            // ---------------------------------------------------------
            // State / invariants
            // ---------------------------------------------------------
            Self::Storage(err) => PublicError::invariant(err.to_string()),
        }
    }
}

fn access_error(err: &AccessError) -> PublicError {
    match err {
        AccessError::Auth(e) => PublicError::unauthorized(e.to_string()),
    }
}

fn registry_error(err: &RegistryOpsError) -> PublicError {
    let message = err.to_string();

    match err {
        RegistryOpsError::AlreadyExists(_) => PublicError::already_exists(message),
        RegistryOpsError::ControllerMissing(_) => PublicError::invariant(message),
        RegistryOpsError::DidTooLong { .. }
        | RegistryOpsError::DocumentEmpty
        | RegistryOpsError::DocumentTooLarge { .. }
        | RegistryOpsError::InvalidController(_)
        | RegistryOpsError::InvalidDid(_) => PublicError::invalid(message),
        RegistryOpsError::NotFound(_) => PublicError::not_found(message),
    }
}

fn state_error(err: &StateOpsError) -> PublicError {
    let message = err.to_string();

    match err {
        StateOpsError::AlreadyInitialized => PublicError::already_initialized(message),
        StateOpsError::InvalidOwner(_) => PublicError::invalid(message),
        StateOpsError::NotInitialized => PublicError::not_initialized(message),
    }
}

impl From<&Error> for PublicError {
    fn from(err: &Error) -> Self {
        err.public()
    }
}

impl From<Error> for PublicError {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{access::auth::AuthError, ids::Did, storage::StorageError};
    use candid::Principal;

    fn code(err: impl Into<Error>) -> ErrorCode {
        PublicError::from(err.into()).code
    }

    #[test]
    fn codes_follow_error_kind() {
        let did = Did::try_new("did:test:e").unwrap();

        assert_eq!(code(AuthError::Anonymous), ErrorCode::Unauthorized);
        assert_eq!(code(RegistryOpsError::NotFound(did.clone())), ErrorCode::NotFound);
        assert_eq!(code(RegistryOpsError::AlreadyExists(did.clone())), ErrorCode::AlreadyExists);
        assert_eq!(code(RegistryOpsError::DocumentEmpty), ErrorCode::InvalidArgument);
        assert_eq!(
            code(RegistryOpsError::InvalidController(Principal::anonymous())),
            ErrorCode::InvalidArgument
        );
        assert_eq!(code(RegistryOpsError::ControllerMissing(did)), ErrorCode::InvariantViolation);
        assert_eq!(code(StateOpsError::AlreadyInitialized), ErrorCode::AlreadyInitialized);
        assert_eq!(code(StateOpsError::NotInitialized), ErrorCode::NotInitialized);
        assert_eq!(
            code(StorageError::LayoutDowngrade {
                stored: 2,
                current: 1
            }),
            ErrorCode::InvariantViolation
        );
    }

    #[test]
    fn message_keeps_detail() {
        let err = PublicError::from(Error::from(AuthError::NotOwner(Principal::anonymous())));

        assert!(err.message.contains("not the registry owner"));
        assert!(err.to_string().starts_with("[Unauthorized]"));
    }
}
