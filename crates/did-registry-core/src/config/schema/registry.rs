use super::{ConfigSchemaError, Validate};
use crate::ids::DID_MAX_BYTES;
use serde::{Deserialize, Serialize};

///
/// Defaults
///

mod defaults {
    pub const fn max_did_bytes() -> u32 {
        crate::ids::DID_MAX_BYTES
    }

    pub const fn max_document_bytes() -> u32 {
        65_536
    }

    pub const fn allow_recreate() -> bool {
        true
    }
}

/// Hard ceiling for a single document; keeps one update message well under
/// the ingress payload limit.
pub const MAX_DOCUMENT_BYTES: u32 = 2 * 1024 * 1024;

///
/// RegistryConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default = "defaults::max_did_bytes")]
    pub max_did_bytes: u32,

    #[serde(default = "defaults::max_document_bytes")]
    pub max_document_bytes: u32,

    // when false, a deleted id stays retired
    #[serde(default = "defaults::allow_recreate")]
    pub allow_recreate: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_did_bytes: defaults::max_did_bytes(),
            max_document_bytes: defaults::max_document_bytes(),
            allow_recreate: defaults::allow_recreate(),
        }
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.max_did_bytes == 0 || self.max_did_bytes > DID_MAX_BYTES {
            return Err(ConfigSchemaError::ValidationError(format!(
                "registry.max_did_bytes {} must be within 1..={DID_MAX_BYTES}",
                self.max_did_bytes
            )));
        }

        if self.max_document_bytes == 0 || self.max_document_bytes > MAX_DOCUMENT_BYTES {
            return Err(ConfigSchemaError::ValidationError(format!(
                "registry.max_document_bytes {} must be within 1..={MAX_DOCUMENT_BYTES}",
                self.max_document_bytes
            )));
        }

        Ok(())
    }
}
