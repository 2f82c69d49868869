use crate::{
    cdk::structures::{DefaultMemoryImpl, cell::Cell, memory::VirtualMemory},
    storage::{prelude::*, stable::memory::state::REGISTRY_STATE_ID},
};
use std::cell::RefCell;

/// Version of the stable layout this module reads and writes.
///
/// Bump it whenever a migration step is added to the upgrade path.
pub const LAYOUT_VERSION: u32 = 1;

//
// REGISTRY_STATE
//

thread_local! {
    static REGISTRY_STATE: RefCell<Cell<RegistryStateRecord, VirtualMemory<DefaultMemoryImpl>>> =
        RefCell::new(Cell::init(
            ic_memory!(RegistryState, REGISTRY_STATE_ID),
            RegistryStateRecord::default(),
        ));
}

///
/// RegistryStateRecord
///
/// Singleton registry state. `layout_version == 0` means the cell has never
/// been written.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistryStateRecord {
    pub layout_version: u32,
    pub initialized: bool,
    pub owner: Option<Principal>,
    pub total_created: u64,
    pub total_deleted: u64,
    pub next_event_seq: u64,
    pub initialized_at: u64,
}

impl RegistryStateRecord {
    /// Number of entries currently Active.
    #[must_use]
    pub const fn active(&self) -> u64 {
        self.total_created.saturating_sub(self.total_deleted)
    }
}

impl_storable_unbounded!(RegistryStateRecord);

///
/// RegistryState
///

pub struct RegistryState;

impl RegistryState {
    pub(crate) fn init_memory() {
        REGISTRY_STATE.with(|_| {});
    }

    #[must_use]
    pub(crate) fn is_initialized() -> bool {
        REGISTRY_STATE.with_borrow(|cell| cell.get().initialized)
    }

    #[must_use]
    pub(crate) fn owner() -> Option<Principal> {
        REGISTRY_STATE.with_borrow(|cell| cell.get().owner)
    }

    /// Apply `f` to a copy of the record and write it back.
    pub(crate) fn update<R>(f: impl FnOnce(&mut RegistryStateRecord) -> R) -> R {
        REGISTRY_STATE.with_borrow_mut(|cell| {
            let mut data = cell.get().clone();
            let out = f(&mut data);
            cell.set(data);

            out
        })
    }

    pub(crate) fn import(data: RegistryStateRecord) {
        REGISTRY_STATE.with_borrow_mut(|cell| cell.set(data));
    }

    #[must_use]
    pub(crate) fn export() -> RegistryStateRecord {
        REGISTRY_STATE.with_borrow(|cell| cell.get().clone())
    }
}

///
/// TESTS
///
