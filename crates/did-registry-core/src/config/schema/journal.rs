use super::{ConfigSchemaError, Validate};
use serde::{Deserialize, Serialize};

///
/// Defaults
///

mod defaults {
    pub const fn max_entries() -> u64 {
        10_000
    }
}

pub const MAX_JOURNAL_ENTRIES: u64 = 100_000;

///
/// JournalConfig
///
/// `max_entries = 0` turns the event journal off.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JournalConfig {
    #[serde(default = "defaults::max_entries")]
    pub max_entries: u64,
}

impl JournalConfig {
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.max_entries > 0
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            max_entries: defaults::max_entries(),
        }
    }
}

impl Validate for JournalConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.max_entries > MAX_JOURNAL_ENTRIES {
            return Err(ConfigSchemaError::ValidationError(format!(
                "journal.max_entries {} exceeds max {}",
                self.max_entries, MAX_JOURNAL_ENTRIES
            )));
        }

        Ok(())
    }
}
