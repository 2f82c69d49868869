//! Append-only event journal.
//!
//! Keys are sequence numbers taken from `RegistryStateRecord::next_event_seq`,
//! so the retained keys always form one contiguous run; retention only ever
//! pops from the front.

use crate::{
    cdk::structures::{BTreeMap, DefaultMemoryImpl, memory::VirtualMemory},
    storage::{prelude::*, stable::memory::journal::JOURNAL_ID},
};
use std::cell::RefCell;

//
// REGISTRY_JOURNAL
//

thread_local! {
    static REGISTRY_JOURNAL: RefCell<BTreeMap<u64, RegistryEventRecord, VirtualMemory<DefaultMemoryImpl>>> =
        RefCell::new(BTreeMap::init(ic_memory!(RegistryJournal, JOURNAL_ID)));
}

///
/// RegistryEventKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RegistryEventKind {
    Initialized,
    DidCreated,
    DidUpdated,
    DidDeleted,
    ControllerTransferred,
    OwnershipTransferred,
}

///
/// RegistryEventRecord
///
/// `target` is the principal that received a role (new owner or new
/// controller) and is `None` for document events.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistryEventRecord {
    pub kind: RegistryEventKind,
    pub did: Option<Did>,
    pub actor: Principal,
    pub target: Option<Principal>,
    pub at: u64,
}

impl_storable_unbounded!(RegistryEventRecord);

///
/// RegistryJournal
///

pub struct RegistryJournal;

impl RegistryJournal {
    pub(crate) fn init_memory() {
        REGISTRY_JOURNAL.with(|_| {});
    }

    pub(crate) fn append(seq: u64, record: RegistryEventRecord) {
        REGISTRY_JOURNAL.with_borrow_mut(|map| {
            map.insert(seq, record);
        });
    }

    /// Drop the oldest entries until at most `keep` remain.
    /// Returns the number of entries removed.
    pub(crate) fn retain_newest(keep: u64) -> u64 {
        REGISTRY_JOURNAL.with_borrow_mut(|map| {
            let mut removed = 0;
            while map.len() > keep {
                if map.pop_first().is_none() {
                    break;
                }
                removed += 1;
            }

            removed
        })
    }

    /// Oldest-first page of `(seq, record)` pairs.
    #[must_use]
    pub(crate) fn page(offset: u64, limit: u64) -> Vec<(u64, RegistryEventRecord)> {
        REGISTRY_JOURNAL.with_borrow(|map| {
            let Some((first, _)) = map.first_key_value() else {
                return Vec::new();
            };

            map.range(first.saturating_add(offset)..)
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .map(|entry| (*entry.key(), entry.value()))
                .collect()
        })
    }

    #[must_use]
    pub(crate) fn len() -> u64 {
        REGISTRY_JOURNAL.with_borrow(|map| map.len())
    }
}

///
/// TESTS
///
