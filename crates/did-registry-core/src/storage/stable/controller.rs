//! Explicit DID → controller mapping.
//!
//! Written when a DID is created, removed when it is deleted, so the keys of
//! this map are exactly the Active ids. Kept apart from the entries map so
//! the controller never has to be parsed out of a document, and so listing
//! ids never decodes a document.

use crate::{
    cdk::structures::{BTreeMap, DefaultMemoryImpl, memory::VirtualMemory},
    storage::{prelude::*, stable::memory::did::DID_CONTROLLERS_ID},
};
use std::cell::RefCell;

//
// DID_CONTROLLERS
//

thread_local! {
    static DID_CONTROLLERS: RefCell<BTreeMap<Did, Principal, VirtualMemory<DefaultMemoryImpl>>> =
        RefCell::new(BTreeMap::init(ic_memory!(DidControllers, DID_CONTROLLERS_ID)));
}

///
/// DidControllers
///

pub struct DidControllers;

impl DidControllers {
    pub(crate) fn init_memory() {
        DID_CONTROLLERS.with(|_| {});
    }

    #[must_use]
    pub(crate) fn get(did: &Did) -> Option<Principal> {
        DID_CONTROLLERS.with_borrow(|map| map.get(did))
    }

    pub(crate) fn set(did: Did, controller: Principal) {
        DID_CONTROLLERS.with_borrow_mut(|map| {
            map.insert(did, controller);
        });
    }

    pub(crate) fn remove(did: &Did) -> Option<Principal> {
        DID_CONTROLLERS.with_borrow_mut(|map| map.remove(did))
    }

    /// Active ids in key order, skipping `offset` and returning at most
    /// `limit`. Values are never read.
    #[must_use]
    pub(crate) fn keys(offset: usize, limit: usize) -> Vec<Did> {
        DID_CONTROLLERS.with_borrow(|map| {
            map.iter()
                .skip(offset)
                .take(limit)
                .map(|entry| entry.key().clone())
                .collect()
        })
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn export() -> Vec<(Did, Principal)> {
        DID_CONTROLLERS.with_borrow(BTreeMap::to_vec)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let did = Did::try_new("did:test:ctl").unwrap();
        let alice = Principal::from_slice(&[1; 29]);
        let bob = Principal::from_slice(&[2; 29]);

        assert_eq!(DidControllers::get(&did), None);

        DidControllers::set(did.clone(), alice);
        DidControllers::set(did.clone(), bob);
        assert_eq!(DidControllers::get(&did), Some(bob));
        assert_eq!(DidControllers::export(), vec![(did.clone(), bob)]);

        assert_eq!(DidControllers::remove(&did), Some(bob));
        assert_eq!(DidControllers::get(&did), None);
    }

    #[test]
    fn keys_page_in_order_without_touching_entries() {
        let alice = Principal::from_slice(&[1; 29]);
        for name in ["did:test:c", "did:test:a", "did:test:b"] {
            DidControllers::set(Did::try_new(name).unwrap(), alice);
        }

        let names = |ids: Vec<Did>| ids.into_iter().map(String::from).collect::<Vec<_>>();
        assert_eq!(
            names(DidControllers::keys(0, 10)),
            vec!["did:test:a", "did:test:b", "did:test:c"]
        );
        assert_eq!(names(DidControllers::keys(1, 1)), vec!["did:test:b"]);
        assert!(DidControllers::keys(3, 10).is_empty());
    }
}
