use crate::dto::prelude::*;

///
/// DidView
/// Public view of an Active DID and its metadata
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DidView {
    pub did: String,
    pub document: String,
    pub controller: Option<Principal>,
    pub created_at: u64,
    pub updated_at: u64,
    pub version: u64,
    pub digest: Vec<u8>,
}
