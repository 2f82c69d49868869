use crate::{PublicError, cdk::candid::Principal, dto::state::InitArgs, workflow};

///
/// LifecycleApi
///

pub struct LifecycleApi;

impl LifecycleApi {
    /// `#[init]`: load config, bring up the memory layout, run the
    /// initializer.
    pub fn init(
        config: &str,
        args: Option<InitArgs>,
        caller: Principal,
    ) -> Result<(), PublicError> {
        let owner = args.and_then(|args| args.owner);

        workflow::lifecycle::LifecycleWorkflow::init(config, owner, caller)
            .map_err(PublicError::from)
    }

    /// `#[post_upgrade]`: reload config, re-register memory, check the
    /// layout version.
    pub fn post_upgrade(config: &str) -> Result<(), PublicError> {
        workflow::lifecycle::LifecycleWorkflow::post_upgrade(config).map_err(PublicError::from)
    }

    /// Library-level initializer; fails once the registry is initialized.
    pub fn initialize(owner: Option<Principal>, caller: Principal) -> Result<(), PublicError> {
        workflow::lifecycle::LifecycleWorkflow::initialize(owner, caller).map_err(PublicError::from)
    }
}
