use crate::{
    cdk::candid::Principal,
    dto::{
        did::DidView,
        journal::{RegistryEventKindView, RegistryEventView},
        state::RegistryStatsView,
    },
    ids::Did,
    storage::stable::{
        did::DidRecord,
        journal::{RegistryEventKind, RegistryEventRecord},
        state::RegistryStateRecord,
    },
};

///
/// DidMapper
///

pub struct DidMapper;

impl DidMapper {
    #[must_use]
    pub fn record_to_view(did: Did, record: DidRecord, controller: Option<Principal>) -> DidView {
        DidView {
            did: did.into(),
            document: record.document,
            controller,
            created_at: record.created_at,
            updated_at: record.updated_at,
            version: record.version,
            digest: record.digest,
        }
    }
}

///
/// RegistryStatsMapper
///

pub struct RegistryStatsMapper;

impl RegistryStatsMapper {
    #[must_use]
    pub const fn record_to_view(state: &RegistryStateRecord) -> RegistryStatsView {
        RegistryStatsView {
            initialized: state.initialized,
            owner: state.owner,
            total_created: state.total_created,
            total_deleted: state.total_deleted,
            active: state.active(),
            layout_version: state.layout_version,
        }
    }
}

///
/// RegistryEventMapper
///

pub struct RegistryEventMapper;

impl RegistryEventMapper {
    #[must_use]
    pub fn record_to_view(seq: u64, record: RegistryEventRecord) -> RegistryEventView {
        RegistryEventView {
            seq,
            kind: Self::kind_to_view(record.kind),
            did: record.did.map(String::from),
            actor: record.actor,
            target: record.target,
            at: record.at,
        }
    }

    const fn kind_to_view(kind: RegistryEventKind) -> RegistryEventKindView {
        match kind {
            RegistryEventKind::Initialized => RegistryEventKindView::Initialized,
            RegistryEventKind::DidCreated => RegistryEventKindView::DidCreated,
            RegistryEventKind::DidUpdated => RegistryEventKindView::DidUpdated,
            RegistryEventKind::DidDeleted => RegistryEventKindView::DidDeleted,
            RegistryEventKind::ControllerTransferred => {
                RegistryEventKindView::ControllerTransferred
            }
            RegistryEventKind::OwnershipTransferred => RegistryEventKindView::OwnershipTransferred,
        }
    }
}
