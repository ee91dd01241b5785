//! Booking data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::constants::{MAX_GUEST_NAME_LENGTH, SERVICE_LAST_HOUR, SERVICE_OPEN_HOUR};

/// One bookable half-hour label within the service window, e.g. `"19:30"`.
///
/// The set of valid slots is fixed at ledger construction; a `TimeSlot`
/// itself is just a normalized label and carries no validity claim.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TimeSlot(String);

impl TimeSlot {
    pub fn new(s: &str) -> Self {
        Self(s.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default evening service window: every `:00` and `:30` mark from
    /// [`SERVICE_OPEN_HOUR`] through [`SERVICE_LAST_HOUR`], in service order.
    #[must_use]
    pub fn evening_service() -> Vec<Self> {
        let hours = SERVICE_OPEN_HOUR..=SERVICE_LAST_HOUR;
        let mut slots = Vec::with_capacity(2 * hours.clone().count());
        for hour in hours {
            slots.push(Self(format!("{hour:02}:00")));
            slots.push(Self(format!("{hour:02}:30")));
        }
        slots
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<String> for TimeSlot {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for TimeSlot {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Type alias for 1-based table numbers, bounded by the configured
/// table count.
pub type TableId = usize;

/// A guest's display name. Whitespace is normalized and overlong input
/// is truncated.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct GuestName(String);

impl GuestName {
    pub fn new(s: &str) -> Self {
        let name: String = s
            .trim()
            .chars()
            .take(MAX_GUEST_NAME_LENGTH)
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for GuestName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<String> for GuestName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

/// A single booking request. Ephemeral - consumed by one `book` call and
/// never stored by the ledger.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BookingRequest {
    pub name: GuestName,
    pub slot: TimeSlot,
    pub vip: bool,
}

impl BookingRequest {
    #[must_use]
    pub fn new(name: &str, slot: &str, vip: bool) -> Self {
        Self {
            name: GuestName::new(name),
            slot: TimeSlot::new(slot),
            vip,
        }
    }
}

impl fmt::Display for BookingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (VIP: {}, time: {})", self.name, self.vip, self.slot)
    }
}

/// A held table cell: the occupant and the instant the hold lapses.
///
/// Occupancy and the release schedule are one combined record, so a table
/// can never be occupied without a release time or vice versa.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableHold {
    pub guest: GuestName,
    pub release_at: DateTime<Utc>,
}

/// The tagged result of a single booking attempt.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BookingOutcome {
    /// A table was assigned for the requested slot.
    Booked(TableId),
    /// The requested time is not one of the configured slots.
    InvalidTimeSlot,
    /// Every table at the requested slot is already held.
    NoTablesAvailable,
}

impl BookingOutcome {
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        matches!(self, Self::Booked(_))
    }
}

impl fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booked(table) => write!(f, "booked table #{table}"),
            Self::InvalidTimeSlot => write!(f, "invalid time slot"),
            Self::NoTablesAvailable => write!(f, "no tables available"),
        }
    }
}

/// Status of a single table within one slot.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableStatus {
    pub table: TableId,
    /// `None` means the table is free for this slot.
    pub occupant: Option<GuestName>,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            Some(guest) => write!(f, "table #{}: {guest}", self.table),
            None => write!(f, "table #{}: free", self.table),
        }
    }
}

/// Status of every table for one slot.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SlotStatus {
    pub slot: TimeSlot,
    pub tables: Vec<TableStatus>,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "time {}:", self.slot)?;
        for table in &self.tables {
            writeln!(f, "  {table}")?;
        }
        Ok(())
    }
}

/// A read-only rendering of the whole ledger, slot by slot in service order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LedgerView {
    pub slots: Vec<SlotStatus>,
}

impl LedgerView {
    /// Count of held tables across every slot.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots
            .iter()
            .flat_map(|slot| &slot.tables)
            .filter(|table| table.occupant.is_some())
            .count()
    }
}

impl fmt::Display for LedgerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            slot.fmt(f)?;
        }
        Ok(())
    }
}
