pub mod mapper;
pub mod query;

use crate::workflow::prelude::*;

///
/// RegistryWorkflow
///
/// Document mutations. Check order is fixed: arguments, initialization,
/// existence (`NotFound` / `AlreadyExists`), then authorization.
///

pub struct RegistryWorkflow;

impl RegistryWorkflow {
    /// Absent/Deleted → Active, with the caller as controller.
    pub fn create_did(caller: Principal, did: &str, document: String) -> Result<(), Error> {
        let did = RegistryOps::parse_did(did)?;
        RegistryOps::validate_document(&document)?;
        StateOps::require_initialized()?;
        RegistryOps::ensure_creatable(&did)?;
        guard::authenticated(caller)?;

        let now = now_nanos();
        let record = RegistryOps::create(did.clone(), document, caller, now);
        JournalOps::record(RegistryEventKind::DidCreated, Some(&did), caller, None, now)?;

        log!(
            Topic::Registry,
            Ok,
            "did '{did}' created by {caller} ({} bytes)",
            record.document.len()
        );

        Ok(())
    }

    /// Replace the document of an Active DID. Controller only.
    pub fn update_did(caller: Principal, did: &str, document: String) -> Result<(), Error> {
        let did = RegistryOps::parse_did(did)?;
        RegistryOps::validate_document(&document)?;
        StateOps::require_initialized()?;
        let current = RegistryOps::require_active(&did)?;
        guard::controller(caller, &did)?;

        let now = now_nanos();
        let record = RegistryOps::update(did.clone(), current, document, now);
        JournalOps::record(RegistryEventKind::DidUpdated, Some(&did), caller, None, now)?;

        log!(
            Topic::Registry,
            Ok,
            "did '{did}' updated by {caller} (v{})",
            record.version
        );

        Ok(())
    }

    /// Active → Deleted. Controller only.
    pub fn delete_did(caller: Principal, did: &str) -> Result<(), Error> {
        let did = RegistryOps::parse_did(did)?;
        StateOps::require_initialized()?;
        let current = RegistryOps::require_active(&did)?;
        guard::controller(caller, &did)?;

        let now = now_nanos();
        RegistryOps::delete(did.clone(), current, now);
        JournalOps::record(RegistryEventKind::DidDeleted, Some(&did), caller, None, now)?;

        log!(Topic::Registry, Ok, "did '{did}' deleted by {caller}");

        Ok(())
    }

    /// Hand control of an Active DID to another principal. Controller only.
    pub fn transfer_controller(
        caller: Principal,
        did: &str,
        new_controller: Principal,
    ) -> Result<(), Error> {
        let did = RegistryOps::parse_did(did)?;
        RegistryOps::validate_controller(new_controller)?;
        StateOps::require_initialized()?;
        RegistryOps::require_active(&did)?;
        guard::controller(caller, &did)?;

        let now = now_nanos();
        RegistryOps::set_controller(did.clone(), new_controller);
        JournalOps::record(
            RegistryEventKind::ControllerTransferred,
            Some(&did),
            caller,
            Some(new_controller),
            now,
        )?;

        log!(
            Topic::Registry,
            Ok,
            "did '{did}' controller {caller} -> {new_controller}"
        );

        Ok(())
    }
}

///
/// TESTS
///
