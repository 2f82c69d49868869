use crate::{
    Error, ThisError,
    cdk::candid::Principal,
    ops::{OpsError, is_assignable},
    storage::{
        StorageError,
        stable::state::{LAYOUT_VERSION, RegistryState, RegistryStateRecord},
    },
};

///
/// StateOpsError
///

#[derive(Debug, ThisError)]
pub enum StateOpsError {
    #[error("registry is already initialized")]
    AlreadyInitialized,

    #[error("principal '{0}' cannot own the registry")]
    InvalidOwner(Principal),

    #[error("registry is not initialized")]
    NotInitialized,
}

impl From<StateOpsError> for Error {
    fn from(err: StateOpsError) -> Self {
        OpsError::State(err).into()
    }
}

///
/// LayoutStatus
/// Outcome of checking the stored layout version after an upgrade.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LayoutStatus {
    Current,
    Migrated { from: u32, to: u32 },
}

///
/// StateOps
///

pub struct StateOps;

impl StateOps {
    #[must_use]
    pub fn is_initialized() -> bool {
        RegistryState::is_initialized()
    }

    pub fn require_initialized() -> Result<(), Error> {
        if !Self::is_initialized() {
            return Err(StateOpsError::NotInitialized.into());
        }

        Ok(())
    }

    pub fn validate_owner(owner: Principal) -> Result<(), Error> {
        if !is_assignable(owner) {
            return Err(StateOpsError::InvalidOwner(owner).into());
        }

        Ok(())
    }

    /// One-time initializer. Sets the owner, zeroes the counters and stamps
    /// the current layout version.
    pub fn initialize(owner: Principal, now: u64) -> Result<(), Error> {
        if Self::is_initialized() {
            return Err(StateOpsError::AlreadyInitialized.into());
        }
        Self::validate_owner(owner)?;

        RegistryState::import(RegistryStateRecord {
            layout_version: LAYOUT_VERSION,
            initialized: true,
            owner: Some(owner),
            initialized_at: now,
            ..Default::default()
        });

        Ok(())
    }

    #[must_use]
    pub fn owner() -> Option<Principal> {
        RegistryState::owner()
    }

    pub fn set_owner(owner: Principal) {
        RegistryState::update(|state| state.owner = Some(owner));
    }

    /// Compare the stored layout version with this module's.
    ///
    /// An older layout is migrated forward in place; a newer one is refused
    /// so older logic never runs against state it does not understand.
    pub fn check_layout() -> Result<LayoutStatus, StorageError> {
        let stored = RegistryState::export().layout_version;

        match stored.cmp(&LAYOUT_VERSION) {
            std::cmp::Ordering::Equal => Ok(LayoutStatus::Current),
            std::cmp::Ordering::Greater => Err(StorageError::LayoutDowngrade {
                stored,
                current: LAYOUT_VERSION,
            }),
            std::cmp::Ordering::Less => {
                // migration steps for each version bump go here, oldest first
                RegistryState::update(|state| state.layout_version = LAYOUT_VERSION);

                Ok(LayoutStatus::Migrated {
                    from: stored,
                    to: LAYOUT_VERSION,
                })
            }
        }
    }

    #[must_use]
    pub fn export() -> RegistryStateRecord {
        RegistryState::export()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> Principal {
        Principal::from_slice(&[id; 29])
    }

    #[test]
    fn initialize_runs_once() {
        assert!(matches!(
            StateOps::require_initialized(),
            Err(Error::Ops(OpsError::State(StateOpsError::NotInitialized)))
        ));

        StateOps::initialize(p(1), 42).unwrap();
        StateOps::require_initialized().unwrap();

        let state = StateOps::export();
        assert_eq!(state.owner, Some(p(1)));
        assert_eq!(state.layout_version, LAYOUT_VERSION);
        assert_eq!(state.initialized_at, 42);
        assert_eq!(state.total_created, 0);

        assert!(matches!(
            StateOps::initialize(p(2), 43),
            Err(Error::Ops(OpsError::State(StateOpsError::AlreadyInitialized)))
        ));
        assert_eq!(StateOps::owner(), Some(p(1)));
    }

    #[test]
    fn anonymous_owner_is_rejected() {
        assert!(matches!(
            StateOps::initialize(Principal::anonymous(), 1),
            Err(Error::Ops(OpsError::State(StateOpsError::InvalidOwner(_))))
        ));
        assert!(!StateOps::is_initialized());
    }

    #[test]
    fn current_layout_is_a_noop() {
        StateOps::initialize(p(1), 1).unwrap();

        assert_eq!(StateOps::check_layout().unwrap(), LayoutStatus::Current);
    }

    #[test]
    fn older_layout_is_migrated_forward() {
        RegistryState::import(RegistryStateRecord {
            layout_version: 0,
            initialized: true,
            owner: Some(p(1)),
            total_created: 4,
            ..Default::default()
        });

        assert_eq!(
            StateOps::check_layout().unwrap(),
            LayoutStatus::Migrated {
                from: 0,
                to: LAYOUT_VERSION
            }
        );

        let state = StateOps::export();
        assert_eq!(state.layout_version, LAYOUT_VERSION);
        assert_eq!(state.total_created, 4);
    }

    #[test]
    fn newer_layout_is_refused() {
        RegistryState::import(RegistryStateRecord {
            layout_version: LAYOUT_VERSION + 1,
            initialized: true,
            ..Default::default()
        });

        assert!(matches!(
            StateOps::check_layout(),
            Err(StorageError::LayoutDowngrade { .. })
        ));
        assert_eq!(StateOps::export().layout_version, LAYOUT_VERSION + 1);
    }
}
