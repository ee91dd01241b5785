//! Booking event types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::models::{GuestName, TableId, TimeSlot};

/// Events queued by the ledger as its state changes.
///
/// Events are delivered to exactly one consumer: the driver drains them
/// after each mutating call and renders or forwards them as it sees fit.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BookingEvent {
    /// A table was assigned to a guest for a slot.
    TableBooked {
        guest: GuestName,
        vip: bool,
        slot: TimeSlot,
        table: TableId,
    },
    /// A table hold lapsed and the table is free again.
    TableReleased { slot: TimeSlot, table: TableId },
}

impl fmt::Display for BookingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableBooked {
                guest,
                vip,
                slot,
                table,
            } => {
                write!(f, "{guest} (VIP: {vip}) booked table #{table} for {slot}")
            }
            Self::TableReleased { slot, table } => {
                write!(f, "table #{table} for {slot} is now free")
            }
        }
    }
}
