//! DID document entries.
//!
//! A deleted DID keeps its slot as a tombstone (`exists = false`, empty
//! document) so the registry can tell a retired id from one that was never
//! created.

use crate::{
    cdk::structures::{BTreeMap, DefaultMemoryImpl, memory::VirtualMemory},
    storage::{prelude::*, stable::memory::did::DID_ENTRIES_ID},
};
use std::cell::RefCell;

//
// DID_ENTRIES
//

thread_local! {
    static DID_ENTRIES: RefCell<BTreeMap<Did, DidRecord, VirtualMemory<DefaultMemoryImpl>>> =
        RefCell::new(BTreeMap::init(ic_memory!(DidEntries, DID_ENTRIES_ID)));
}

///
/// DidRecord
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DidRecord {
    pub document: String,
    pub exists: bool,
    pub created_at: u64,
    pub updated_at: u64,
    pub version: u64,

    // sha-256 of the document bytes, empty for tombstones
    #[serde(with = "serde_bytes")]
    pub digest: Vec<u8>,
}

impl DidRecord {
    /// Tombstone left behind by a delete.
    #[must_use]
    pub fn tombstone(mut self, now: u64) -> Self {
        self.document.clear();
        self.digest.clear();
        self.exists = false;
        self.updated_at = now;

        self
    }
}

impl_storable_unbounded!(DidRecord);

///
/// DidEntries
///

pub struct DidEntries;

impl DidEntries {
    pub(crate) fn init_memory() {
        DID_ENTRIES.with(|_| {});
    }

    #[must_use]
    pub(crate) fn get(did: &Did) -> Option<DidRecord> {
        DID_ENTRIES.with_borrow(|map| map.get(did))
    }

    /// Active record only; tombstones read as absent.
    #[must_use]
    pub(crate) fn get_active(did: &Did) -> Option<DidRecord> {
        Self::get(did).filter(|record| record.exists)
    }

    pub(crate) fn insert(did: Did, record: DidRecord) {
        DID_ENTRIES.with_borrow_mut(|map| {
            map.insert(did, record);
        });
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn count_active() -> u64 {
        DID_ENTRIES.with_borrow(|map| map.iter().filter(|entry| entry.value().exists).count() as u64)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn did(s: &str) -> Did {
        Did::try_new(s).unwrap()
    }

    fn active(document: &str) -> DidRecord {
        DidRecord {
            document: document.to_string(),
            exists: true,
            created_at: 1,
            updated_at: 1,
            version: 1,
            digest: vec![0xab; 32],
        }
    }

    #[test]
    fn tombstone_reads_as_absent() {
        let id = did("did:test:a");
        DidEntries::insert(id.clone(), active("{}").tombstone(5));

        let stored = DidEntries::get(&id).unwrap();
        assert!(!stored.exists);
        assert!(stored.document.is_empty());
        assert!(stored.digest.is_empty());
        assert_eq!(stored.updated_at, 5);
        assert_eq!(DidEntries::get_active(&id), None);
    }

    #[test]
    fn count_active_skips_tombstones() {
        DidEntries::insert(did("c"), active("3"));
        DidEntries::insert(did("a"), active("1"));
        DidEntries::insert(did("b"), active("2").tombstone(2));

        assert_eq!(DidEntries::count_active(), 2);
    }
}
