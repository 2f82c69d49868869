use super::{ConfigSchemaError, Validate};
use crate::log::Level;
use serde::{Deserialize, Serialize};

///
/// LogConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default = "default_min_level")]
    pub min_level: Level,
}

const fn default_min_level() -> Level {
    Level::Info
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        Ok(())
    }
}
