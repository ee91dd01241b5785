//! Booking engine constants.

/// Default number of tables in the dining room.
pub const DEFAULT_TOTAL_TABLES: usize = 10;

/// Default number of seconds a booking holds its table before automatic
/// release. Stands in for a real checkout event.
pub const DEFAULT_HOLD_SECS: u64 = 30;

/// First hour of the evening service window (inclusive).
pub const SERVICE_OPEN_HOUR: u8 = 18;

/// Last hour of the evening service window (inclusive). The final bookable
/// slot is the half-hour mark of this hour.
pub const SERVICE_LAST_HOUR: u8 = 23;

/// Maximum accepted guest name length. Longer names are truncated.
pub const MAX_GUEST_NAME_LENGTH: usize = 32;
