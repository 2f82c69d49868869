use crate::dto::prelude::*;

///
/// InitArgs
/// Canister install argument; `owner` defaults to the installer
///

#[derive(CandidType, Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct InitArgs {
    pub owner: Option<Principal>,
}

///
/// RegistryStatsView
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistryStatsView {
    pub initialized: bool,
    pub owner: Option<Principal>,
    pub total_created: u64,
    pub total_deleted: u64,
    pub active: u64,
    pub layout_version: u32,
}
