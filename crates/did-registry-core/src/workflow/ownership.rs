use crate::workflow::prelude::*;

///
/// OwnershipWorkflow
///

pub struct OwnershipWorkflow;

impl OwnershipWorkflow {
    /// Hand the registry to `new_owner`. The previous owner loses all admin
    /// rights in the same message.
    pub fn transfer_ownership(caller: Principal, new_owner: Principal) -> Result<(), Error> {
        StateOps::validate_owner(new_owner)?;
        StateOps::require_initialized()?;
        guard::owner(caller)?;

        let now = now_nanos();
        StateOps::set_owner(new_owner);
        JournalOps::record(
            RegistryEventKind::OwnershipTransferred,
            None,
            caller,
            Some(new_owner),
            now,
        )?;

        log!(Topic::Ownership, Ok, "ownership transferred {caller} -> {new_owner}");

        Ok(())
    }
}

///
/// TESTS
///
