//! Read side of the registry. Queries never fail: an unknown or malformed id
//! reads the same as a deleted one.

use crate::{
    cdk::candid::Principal,
    dto::{
        did::DidView,
        journal::RegistryEventView,
        page::{Page, PageRequest},
        state::RegistryStatsView,
    },
    ids::Did,
    ops::{journal::JournalOps, registry::RegistryOps, state::StateOps},
    workflow::registry::mapper::{DidMapper, RegistryEventMapper, RegistryStatsMapper},
};

///
/// RegistryQuery
///

pub struct RegistryQuery;

impl RegistryQuery {
    #[must_use]
    pub fn document(did: &str) -> String {
        Did::try_new(did)
            .map(|did| RegistryOps::document(&did))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn record(did: &str) -> Option<DidView> {
        let did = Did::try_new(did).ok()?;
        let (record, controller) = RegistryOps::active_record(&did)?;

        Some(DidMapper::record_to_view(did, record, controller))
    }

    #[must_use]
    pub fn controller(did: &str) -> Option<Principal> {
        let did = Did::try_new(did).ok()?;

        RegistryOps::controller(&did)
    }

    #[must_use]
    pub fn total_created() -> u64 {
        StateOps::export().total_created
    }

    #[must_use]
    pub fn total_deleted() -> u64 {
        StateOps::export().total_deleted
    }

    #[must_use]
    pub fn active() -> u64 {
        StateOps::export().active()
    }

    #[must_use]
    pub fn owner() -> Option<Principal> {
        StateOps::owner()
    }

    /// Active ids in key order.
    #[must_use]
    pub fn list(page: PageRequest) -> Page<String> {
        let page = page.clamped();
        let entries = RegistryOps::list_active(page.offset, page.limit)
            .into_iter()
            .map(String::from)
            .collect();

        Page {
            entries,
            total: Self::active(),
        }
    }

    #[must_use]
    pub fn stats() -> RegistryStatsView {
        RegistryStatsMapper::record_to_view(&StateOps::export())
    }

    /// Journal events, oldest first.
    #[must_use]
    pub fn events(page: PageRequest) -> Page<RegistryEventView> {
        let page = page.clamped();
        let (events, total) = JournalOps::page(page.offset, page.limit);

        Page {
            entries: events
                .into_iter()
                .map(|(seq, record)| RegistryEventMapper::record_to_view(seq, record))
                .collect(),
            total,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::journal::RegistryEventKindView,
        workflow::{lifecycle::LifecycleWorkflow, registry::RegistryWorkflow},
    };

    fn p(id: u8) -> Principal {
        Principal::from_slice(&[id; 29])
    }

    #[test]
    fn malformed_ids_read_as_absent() {
        assert_eq!(RegistryQuery::document(""), "");
        assert_eq!(RegistryQuery::document(" padded "), "");
        assert_eq!(RegistryQuery::record(&"x".repeat(300)), None);
        assert_eq!(RegistryQuery::controller(""), None);
    }

    #[test]
    fn record_view_carries_metadata() {
        LifecycleWorkflow::initialize(None, p(1)).unwrap();
        RegistryWorkflow::create_did(p(2), "did:test:meta", "abc".into()).unwrap();

        let view = RegistryQuery::record("did:test:meta").unwrap();
        assert_eq!(view.did, "did:test:meta");
        assert_eq!(view.document, "abc");
        assert_eq!(view.controller, Some(p(2)));
        assert_eq!(view.version, 1);
        assert_eq!(view.created_at, view.updated_at);
        // sha-256("abc")
        assert_eq!(view.digest[..4], [0xba, 0x78, 0x16, 0xbf]);
    }

    #[test]
    fn list_clamps_and_pages() {
        LifecycleWorkflow::initialize(None, p(1)).unwrap();
        for i in 0..120 {
            RegistryWorkflow::create_did(p(2), &format!("did:test:{i:03}"), "x".into()).unwrap();
        }

        let page = RegistryQuery::list(PageRequest::new(500, 0));
        assert_eq!(page.entries.len(), 100);
        assert_eq!(page.total, 120);
        assert_eq!(page.entries[0], "did:test:000");

        let tail = RegistryQuery::list(PageRequest::new(50, 110));
        assert_eq!(tail.entries.len(), 10);
        assert_eq!(tail.entries[9], "did:test:119");
    }

    #[test]
    fn stats_and_events_reflect_history() {
        LifecycleWorkflow::initialize(Some(p(1)), p(9)).unwrap();
        RegistryWorkflow::create_did(p(2), "did:test:s", "x".into()).unwrap();
        RegistryWorkflow::delete_did(p(2), "did:test:s").unwrap();

        let stats = RegistryQuery::stats();
        assert!(stats.initialized);
        assert_eq!(stats.owner, Some(p(1)));
        assert_eq!((stats.total_created, stats.total_deleted, stats.active), (1, 1, 0));

        let events = RegistryQuery::events(PageRequest::DEFAULT);
        assert_eq!(events.total, 3);
        assert_eq!(events.entries[0].kind, RegistryEventKindView::Initialized);
        assert_eq!(events.entries[0].actor, p(9));
        assert_eq!(events.entries[2].kind, RegistryEventKindView::DidDeleted);
        assert_eq!(events.entries[2].did.as_deref(), Some("did:test:s"));
    }
}
