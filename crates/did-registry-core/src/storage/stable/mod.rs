pub mod controller;
pub mod did;
pub mod journal;
pub mod state;

use crate::{
    CRATE_NAME, ic_memory_range, log,
    log::Topic,
    memory::runtime::MemoryRegistryRuntime,
    storage::StorageError,
};

///
/// The registry is only allowed to allocate within this inclusive range.
///

pub const REGISTRY_MEMORY_MIN: u8 = 1;
pub const REGISTRY_MEMORY_MAX: u8 = 20;

///
/// Registry stable memory IDs (1–20)
///
/// Once assigned, an ID is part of the storage layout: it is never renumbered,
/// reused or removed. New state takes a new ID from a reserved gap.
///

pub mod memory {

    // ---------------------------------------------------------------------
    // Registry state (1–4)
    //
    // Ownership:
    // - Initialization flag and owner
    // - Lifetime counters
    // - Layout version
    // ---------------------------------------------------------------------

    pub mod state {
        pub const REGISTRY_STATE_ID: u8 = 1;

        // Reserved: 2–4
    }

    // ---------------------------------------------------------------------
    // DID documents (5–10)
    //
    // Ownership:
    // - Document entries and tombstones
    // - Controller mapping
    //
    // Expected growth: medium
    // ---------------------------------------------------------------------

    pub mod did {
        pub const DID_ENTRIES_ID: u8 = 5;
        pub const DID_CONTROLLERS_ID: u8 = 6;

        // Reserved: 7–10
    }

    // ---------------------------------------------------------------------
    // Event journal (11–14)
    // ---------------------------------------------------------------------

    pub mod journal {
        pub const JOURNAL_ID: u8 = 11;

        // Reserved: 12–14
    }

    // Unassigned: 15–20
}

/// Bring up the stable-memory layout.
///
/// Touches every stable structure in ID order so each registers its memory
/// ID, then validates the registrations against the reserved range. Must run
/// before any endpoint logic in both `init` and `post_upgrade`.
pub(crate) fn init_layout() -> Result<(), StorageError> {
    ic_memory_range!(REGISTRY_MEMORY_MIN, REGISTRY_MEMORY_MAX);

    state::RegistryState::init_memory();
    did::DidEntries::init_memory();
    controller::DidControllers::init_memory();
    journal::RegistryJournal::init_memory();

    let summary = MemoryRegistryRuntime::init(None)?;

    for (id, entry) in &summary.entries {
        log!(Topic::Memory, Debug, "memory id {id}: {}::{}", entry.crate_name, entry.label);
    }

    log!(
        Topic::Memory,
        Info,
        "memory layout ready ({} ids in {} ranges)",
        summary.entries.len(),
        summary.ranges.len()
    );

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::registry::MemoryRegistry;

    #[test]
    fn layout_registers_every_structure() {
        init_layout().unwrap();

        let entries = MemoryRegistry::export();
        let ids: Vec<u8> = entries.iter().map(|(id, _)| *id).collect();

        assert_eq!(
            ids,
            vec![
                memory::state::REGISTRY_STATE_ID,
                memory::did::DID_ENTRIES_ID,
                memory::did::DID_CONTROLLERS_ID,
                memory::journal::JOURNAL_ID,
            ]
        );
        assert!(entries.iter().all(|(_, e)| e.crate_name == CRATE_NAME));
        assert_eq!(entries[1].1.label, "DidEntries");
    }

    #[test]
    fn layout_init_is_idempotent() {
        init_layout().unwrap();
        init_layout().unwrap();

        assert_eq!(MemoryRegistry::export_ranges().len(), 1);
    }

    #[test]
    fn ids_stay_inside_reserved_range() {
        for id in [
            memory::state::REGISTRY_STATE_ID,
            memory::did::DID_ENTRIES_ID,
            memory::did::DID_CONTROLLERS_ID,
            memory::journal::JOURNAL_ID,
        ] {
            assert!((REGISTRY_MEMORY_MIN..=REGISTRY_MEMORY_MAX).contains(&id));
        }
    }
}
