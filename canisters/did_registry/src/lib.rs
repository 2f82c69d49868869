//! DID document registry canister.
//!
//! Endpoints are thin: each reads the caller and forwards to the core API.
//! Lifecycle hooks trap on failure, which aborts the install or upgrade and
//! leaves the previous module and its state in place.

use candid::Principal;
use did_registry_core::{
    PublicError,
    api::{lifecycle::LifecycleApi, registry::RegistryApi},
    cdk::{api::msg_caller, export_candid, init, post_upgrade, query, trap, update},
    dto::{
        did::DidView,
        journal::RegistryEventView,
        page::{Page, PageRequest},
        state::{InitArgs, RegistryStatsView},
    },
};

const CONFIG: &str = include_str!(env!("DID_REGISTRY_CONFIG_PATH"));

//
// LIFECYCLE
//

#[init]
fn init(args: Option<InitArgs>) {
    if let Err(err) = LifecycleApi::init(CONFIG, args, msg_caller()) {
        trap(&format!("init: {err}"));
    }
}

#[post_upgrade]
fn post_upgrade() {
    if let Err(err) = LifecycleApi::post_upgrade(CONFIG) {
        trap(&format!("post_upgrade: {err}"));
    }
}

#[update]
fn initialize(owner: Option<Principal>) -> Result<(), PublicError> {
    LifecycleApi::initialize(owner, msg_caller())
}

//
// DOCUMENTS
//

#[update(name = "createDID")]
fn create_did(did: String, document: String) -> Result<(), PublicError> {
    RegistryApi::create_did(msg_caller(), &did, document)
}

#[update(name = "updateDID")]
fn update_did(did: String, document: String) -> Result<(), PublicError> {
    RegistryApi::update_did(msg_caller(), &did, document)
}

#[update(name = "updateDIDDoc")]
fn update_did_doc(did: String, document: String) -> Result<(), PublicError> {
    RegistryApi::update_did(msg_caller(), &did, document)
}

#[update(name = "deleteDID")]
fn delete_did(did: String) -> Result<(), PublicError> {
    RegistryApi::delete_did(msg_caller(), &did)
}

#[query(name = "getDID")]
fn get_did(did: String) -> String {
    RegistryApi::get_did(&did)
}

#[query(name = "getDIDDoc")]
fn get_did_doc(did: String) -> String {
    RegistryApi::get_did(&did)
}

#[query(name = "getDIDRecord")]
fn get_did_record(did: String) -> Option<DidView> {
    RegistryApi::get_did_record(&did)
}

//
// CONTROLLERS
//

#[query(name = "getController")]
fn get_controller(did: String) -> Option<Principal> {
    RegistryApi::get_controller(&did)
}

#[update(name = "transferController")]
fn transfer_controller(did: String, new_controller: Principal) -> Result<(), PublicError> {
    RegistryApi::transfer_controller(msg_caller(), &did, new_controller)
}

//
// OWNERSHIP
//

#[query(name = "getOwner")]
fn get_owner() -> Option<Principal> {
    RegistryApi::owner()
}

#[update(name = "transferOwnership")]
fn transfer_ownership(new_owner: Principal) -> Result<(), PublicError> {
    RegistryApi::transfer_ownership(msg_caller(), new_owner)
}

//
// COUNTERS & ENUMERATION
//

#[query(name = "getTotalNumberOfDIDs")]
fn get_total_number_of_dids() -> u64 {
    RegistryApi::total_created()
}

#[query(name = "getTotalNumberOfDeletedDIDs")]
fn get_total_number_of_deleted_dids() -> u64 {
    RegistryApi::total_deleted()
}

#[query(name = "getActiveNumberOfDIDs")]
fn get_active_number_of_dids() -> u64 {
    RegistryApi::active()
}

#[query(name = "listDIDs")]
fn list_dids(page: PageRequest) -> Page<String> {
    RegistryApi::list_dids(page)
}

#[query(name = "getRegistryStats")]
fn get_registry_stats() -> RegistryStatsView {
    RegistryApi::stats()
}

#[query(name = "getEvents")]
fn get_events(page: PageRequest) -> Page<RegistryEventView> {
    RegistryApi::events(page)
}

export_candid!();
