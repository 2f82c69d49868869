use crate::{
    ThisError, access::AccessError, config::ConfigError, ops::OpsError, storage::StorageError,
};

///
/// Error
///
/// Internal, structured error type.
///
/// This error:
/// - is NOT Candid-exposed
/// - is NOT stable across versions
///
/// Every canister endpoint converts it into the public envelope in
/// [`crate::dto::error::Error`] via `api`.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ops(#[from] OpsError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
