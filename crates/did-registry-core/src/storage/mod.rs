//! Persistent state model.
//!
//! This module owns every structure stored in stable memory and the rules
//! that keep the layout readable across upgrades. It knows nothing about
//! callers or authorization; lifecycle policy lives in `ops` and `workflow`.

pub mod stable;

use crate::{ThisError, memory::registry::MemoryRegistryError};

/// Common imports for storage submodules.
pub(crate) mod prelude {
    pub use crate::{
        cdk::candid::Principal,
        ic_memory, impl_storable_unbounded,
        ids::Did,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// StorageError
///

#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error(transparent)]
    MemoryRegistry(#[from] MemoryRegistryError),

    /// The stable state was written by a newer module than the one running.
    #[error("stored layout version {stored} is newer than this module's version {current}")]
    LayoutDowngrade { stored: u32, current: u32 },
}
