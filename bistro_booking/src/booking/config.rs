//! Ledger configuration models.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::constants::{DEFAULT_HOLD_SECS, DEFAULT_TOTAL_TABLES};
use super::errors::{ConfigError, ConfigResult};
use super::models::TimeSlot;

/// Ledger configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LedgerConfig {
    /// Number of physical tables in the dining room
    pub total_tables: usize,

    /// Seconds a booking holds its table before automatic release
    pub hold_secs: u64,

    /// Bookable half-hour labels, in service order
    pub slots: Vec<TimeSlot>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            total_tables: DEFAULT_TOTAL_TABLES,
            hold_secs: DEFAULT_HOLD_SECS,
            slots: TimeSlot::evening_service(),
        }
    }
}

impl LedgerConfig {
    /// Default evening service with the given table count.
    #[must_use]
    pub fn with_tables(total_tables: usize) -> Self {
        Self {
            total_tables,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.total_tables == 0 {
            return Err(ConfigError::NoTables);
        }

        if self.hold_secs == 0 {
            return Err(ConfigError::ZeroHold);
        }

        if self.slots.is_empty() {
            return Err(ConfigError::EmptyServiceWindow);
        }

        let mut seen = HashSet::with_capacity(self.slots.len());
        for slot in &self.slots {
            if !seen.insert(slot) {
                return Err(ConfigError::DuplicateSlot(slot.clone()));
            }
        }

        Ok(())
    }

    /// The hold duration as a [`chrono::Duration`].
    #[must_use]
    pub fn hold(&self) -> Duration {
        Duration::seconds(self.hold_secs as i64)
    }
}
