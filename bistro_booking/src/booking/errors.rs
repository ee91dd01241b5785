//! Ledger configuration error types.

use thiserror::Error;

use super::models::TimeSlot;

/// Errors rejected at ledger construction time.
///
/// Recoverable booking failures (`InvalidTimeSlot`, `NoTablesAvailable`) are
/// ordinary [`super::models::BookingOutcome`] values, not errors.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    /// The dining room needs at least one table
    #[error("total tables must be greater than zero")]
    NoTables,

    /// The hold duration must be positive
    #[error("hold duration must be greater than zero seconds")]
    ZeroHold,

    /// The service window needs at least one bookable slot
    #[error("service window has no time slots")]
    EmptyServiceWindow,

    /// Slot labels must be unique within the service window
    #[error("duplicate time slot {0} in service window")]
    DuplicateSlot(TimeSlot),
}

/// Result type for ledger construction.
pub type ConfigResult<T> = Result<T, ConfigError>;
