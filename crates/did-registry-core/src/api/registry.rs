use crate::{
    PublicError,
    cdk::candid::Principal,
    dto::{
        did::DidView,
        journal::RegistryEventView,
        page::{Page, PageRequest},
        state::RegistryStatsView,
    },
    workflow::{
        ownership::OwnershipWorkflow,
        registry::{RegistryWorkflow, query::RegistryQuery},
    },
};

///
/// RegistryApi
///

pub struct RegistryApi;

impl RegistryApi {
    //
    // Mutations
    //

    pub fn create_did(caller: Principal, did: &str, document: String) -> Result<(), PublicError> {
        RegistryWorkflow::create_did(caller, did, document).map_err(PublicError::from)
    }

    pub fn update_did(caller: Principal, did: &str, document: String) -> Result<(), PublicError> {
        RegistryWorkflow::update_did(caller, did, document).map_err(PublicError::from)
    }

    pub fn delete_did(caller: Principal, did: &str) -> Result<(), PublicError> {
        RegistryWorkflow::delete_did(caller, did).map_err(PublicError::from)
    }

    pub fn transfer_controller(
        caller: Principal,
        did: &str,
        new_controller: Principal,
    ) -> Result<(), PublicError> {
        RegistryWorkflow::transfer_controller(caller, did, new_controller)
            .map_err(PublicError::from)
    }

    pub fn transfer_ownership(caller: Principal, new_owner: Principal) -> Result<(), PublicError> {
        OwnershipWorkflow::transfer_ownership(caller, new_owner).map_err(PublicError::from)
    }

    //
    // Queries
    //

    #[must_use]
    pub fn get_did(did: &str) -> String {
        RegistryQuery::document(did)
    }

    #[must_use]
    pub fn get_did_record(did: &str) -> Option<DidView> {
        RegistryQuery::record(did)
    }

    #[must_use]
    pub fn get_controller(did: &str) -> Option<Principal> {
        RegistryQuery::controller(did)
    }

    #[must_use]
    pub fn total_created() -> u64 {
        RegistryQuery::total_created()
    }

    #[must_use]
    pub fn total_deleted() -> u64 {
        RegistryQuery::total_deleted()
    }

    #[must_use]
    pub fn active() -> u64 {
        RegistryQuery::active()
    }

    #[must_use]
    pub fn owner() -> Option<Principal> {
        RegistryQuery::owner()
    }

    #[must_use]
    pub fn list_dids(page: PageRequest) -> Page<String> {
        RegistryQuery::list(page)
    }

    #[must_use]
    pub fn stats() -> RegistryStatsView {
        RegistryQuery::stats()
    }

    #[must_use]
    pub fn events(page: PageRequest) -> Page<RegistryEventView> {
        RegistryQuery::events(page)
    }
}

///
/// TESTS
///
