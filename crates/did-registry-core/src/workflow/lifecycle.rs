use crate::{
    config::Config,
    ops::state::LayoutStatus,
    storage::stable::{self, state::LAYOUT_VERSION},
    workflow::prelude::*,
};

///
/// LifecycleWorkflow
///

pub struct LifecycleWorkflow;

impl LifecycleWorkflow {
    /// Install path: config, memory layout, then the one-time initializer.
    pub fn init(config: &str, owner: Option<Principal>, caller: Principal) -> Result<(), Error> {
        Self::load_config(config)?;
        stable::init_layout()?;

        Self::initialize(owner, caller)
    }

    /// One-time initializer. `owner` defaults to the caller.
    pub fn initialize(owner: Option<Principal>, caller: Principal) -> Result<(), Error> {
        let owner = owner.unwrap_or(caller);
        let now = now_nanos();

        StateOps::initialize(owner, now)?;
        JournalOps::record(RegistryEventKind::Initialized, None, caller, Some(owner), now)?;

        log!(Topic::Init, Ok, "registry initialized (owner {owner}, layout v{LAYOUT_VERSION})");

        Ok(())
    }

    /// Upgrade path: the heap is fresh, stable memory is not.
    pub fn post_upgrade(config: &str) -> Result<(), Error> {
        Self::load_config(config)?;
        stable::init_layout()?;

        match StateOps::check_layout()? {
            LayoutStatus::Current => {
                log!(Topic::Upgrade, Info, "layout v{LAYOUT_VERSION} unchanged");
            }
            LayoutStatus::Migrated { from, to } => {
                log!(Topic::Upgrade, Ok, "layout migrated v{from} -> v{to}");
            }
        }

        let state = StateOps::export();
        log!(
            Topic::Upgrade,
            Info,
            "upgrade complete: {} created, {} deleted, {} active",
            state.total_created,
            state.total_deleted,
            state.active()
        );

        Ok(())
    }

    fn load_config(config: &str) -> Result<(), Error> {
        Config::init_from_toml(config)?;

        let cfg = Config::get()?;
        log!(
            Topic::Config,
            Info,
            "config loaded (did <= {}B, document <= {}B, journal {} entries)",
            cfg.registry.max_did_bytes,
            cfg.registry.max_document_bytes,
            cfg.journal.max_entries
        );

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ops::{OpsError, state::StateOpsError},
        storage::{
            StorageError,
            stable::state::{RegistryState, RegistryStateRecord},
        },
    };

    fn p(id: u8) -> Principal {
        Principal::from_slice(&[id; 29])
    }

    #[test]
    fn init_defaults_owner_to_caller() {
        Config::reset_for_tests();
        LifecycleWorkflow::init("", None, p(1)).unwrap();

        assert_eq!(StateOps::owner(), Some(p(1)));

        let (events, _) = JournalOps::page(0, 10);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1.kind, RegistryEventKind::Initialized);
        assert_eq!(events[0].1.target, Some(p(1)));
    }

    #[test]
    fn init_honours_explicit_owner() {
        Config::reset_for_tests();
        LifecycleWorkflow::init("", Some(p(2)), p(1)).unwrap();

        assert_eq!(StateOps::owner(), Some(p(2)));
    }

    #[test]
    fn initialize_twice_fails() {
        LifecycleWorkflow::initialize(None, p(1)).unwrap();

        assert!(matches!(
            LifecycleWorkflow::initialize(Some(p(3)), p(3)),
            Err(Error::Ops(OpsError::State(StateOpsError::AlreadyInitialized)))
        ));
        assert_eq!(StateOps::owner(), Some(p(1)));
    }

    #[test]
    fn bad_config_fails_install() {
        Config::reset_for_tests();

        assert!(matches!(
            LifecycleWorkflow::init("[registry]\nmax_did_bytes = 0\n", None, p(1)),
            Err(Error::Config(_))
        ));
        assert!(!StateOps::is_initialized());
    }

    #[test]
    fn post_upgrade_keeps_state() {
        LifecycleWorkflow::initialize(None, p(1)).unwrap();
        RegistryState::update(|s| s.total_created = 5);

        // a fresh heap after the upgrade
        Config::reset_for_tests();
        LifecycleWorkflow::post_upgrade("").unwrap();

        let state = StateOps::export();
        assert_eq!(state.total_created, 5);
        assert_eq!(state.owner, Some(p(1)));
    }

    #[test]
    fn post_upgrade_refuses_newer_layout() {
        RegistryState::import(RegistryStateRecord {
            layout_version: LAYOUT_VERSION + 1,
            initialized: true,
            owner: Some(p(1)),
            ..Default::default()
        });

        Config::reset_for_tests();
        assert!(matches!(
            LifecycleWorkflow::post_upgrade(""),
            Err(Error::Storage(StorageError::LayoutDowngrade { .. }))
        ));
    }
}
