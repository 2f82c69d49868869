use candid::{
    CandidType, Principal, decode_one, encode_args, encode_one, utils::ArgumentEncoder,
};
use derive_more::{Deref, DerefMut};
use did_registry_core::dto::state::InitArgs;
use pocket_ic::{PocketIc, PocketIcBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error as ThisError;

const INSTALL_CYCLES: u128 = 1_000_000_000_000;

///
/// PicError
///

#[derive(Debug, ThisError)]
pub enum PicError {
    #[error("candid error: {0}")]
    Candid(#[from] candid::Error),

    #[error("call rejected: {0}")]
    Rejected(String),
}

///
/// PicBuilder
///

pub struct PicBuilder(PocketIcBuilder);

#[allow(clippy::new_without_default)]
impl PicBuilder {
    /// Start a new PicBuilder with sensible defaults
    #[must_use]
    pub fn new() -> Self {
        Self(PocketIcBuilder::new())
    }

    #[must_use]
    pub fn with_application_subnet(mut self) -> Self {
        self.0 = self.0.with_application_subnet();
        self
    }

    /// Finish building the PocketIC instance and wrap it
    #[must_use]
    pub fn build(self) -> Pic {
        Pic(self.0.build())
    }
}

///
/// Pic
///

#[derive(Deref, DerefMut)]
pub struct Pic(PocketIc);

impl Pic {
    /// Create a canister controlled by `installer` and install the registry
    /// wasm. `installer` is the caller seen by `#[init]`.
    pub fn install_registry(
        &self,
        wasm: Vec<u8>,
        installer: Principal,
        args: Option<InitArgs>,
    ) -> Result<Principal, PicError> {
        let canister_id = self.create_canister_with_settings(Some(installer), None);
        self.add_cycles(canister_id, INSTALL_CYCLES);

        let init_bytes = encode_one(args)?;
        self.0
            .install_canister(canister_id, wasm, init_bytes, Some(installer));

        Ok(canister_id)
    }

    /// Upgrade in place; stable memory and the canister id are kept.
    pub fn upgrade_registry(
        &self,
        canister_id: Principal,
        wasm: Vec<u8>,
        installer: Principal,
    ) -> Result<(), PicError> {
        let bytes = encode_args(())?;

        self.0
            .upgrade_canister(canister_id, wasm, bytes, Some(installer))
            .map_err(|e| PicError::Rejected(e.to_string()))
    }

    /// Update call as `sender` (serializes args + decodes result)
    pub fn update_call<T, A>(
        &self,
        canister_id: Principal,
        sender: Principal,
        method: &str,
        args: A,
    ) -> Result<T, PicError>
    where
        T: CandidType + DeserializeOwned,
        A: ArgumentEncoder,
    {
        let bytes: Vec<u8> = encode_args(args)?;
        let result = self
            .0
            .update_call(canister_id, sender, method, bytes)
            .map_err(|e| PicError::Rejected(e.to_string()))?;

        decode_one(&result).map_err(Into::into)
    }

    /// Query call as `sender`
    pub fn query_call<T, A>(
        &self,
        canister_id: Principal,
        sender: Principal,
        method: &str,
        args: A,
    ) -> Result<T, PicError>
    where
        T: CandidType + DeserializeOwned,
        A: ArgumentEncoder,
    {
        let bytes: Vec<u8> = encode_args(args)?;
        let result = self
            .0
            .query_call(canister_id, sender, method, bytes)
            .map_err(|e| PicError::Rejected(e.to_string()))?;

        decode_one(&result).map_err(Into::into)
    }
}

/// Fresh PocketIC instance with one application subnet.
#[must_use]
pub fn pic() -> Pic {
    PicBuilder::new().with_application_subnet().build()
}
