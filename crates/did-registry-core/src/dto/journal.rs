use crate::dto::prelude::*;

///
/// RegistryEventKindView
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RegistryEventKindView {
    Initialized,
    DidCreated,
    DidUpdated,
    DidDeleted,
    ControllerTransferred,
    OwnershipTransferred,
}

///
/// RegistryEventView
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistryEventView {
    pub seq: u64,
    pub kind: RegistryEventKindView,
    pub did: Option<String>,
    pub actor: Principal,
    pub target: Option<Principal>,
    pub at: u64,
}
