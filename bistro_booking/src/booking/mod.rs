//! Booking engine module - ledger, events, statistics, and configuration.
//!
//! This module implements:
//! - Slot-by-table occupancy stored in a fixed two-dimensional table
//! - Deterministic first-free table assignment (lowest table number wins)
//! - Timed release of held tables against an injected clock
//! - Booking and release events consumed synchronously by the driver
//! - Booking attempt statistics
//!
//! ## Example
//!
//! ```
//! use bistro_booking::booking::{BookingLedger, BookingRequest, LedgerConfig};
//! use chrono::Utc;
//!
//! let mut ledger =
//!     BookingLedger::new(LedgerConfig::default()).expect("default config is valid");
//! let request = BookingRequest::new("Maria", "19:30", true);
//! let outcome = ledger.book(&request, Utc::now());
//! assert!(outcome.is_booked());
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod models;
pub mod stats;

pub use config::LedgerConfig;
pub use errors::{ConfigError, ConfigResult};
pub use events::BookingEvent;
pub use ledger::BookingLedger;
pub use models::{
    BookingOutcome, BookingRequest, GuestName, LedgerView, SlotStatus, TableHold, TableId,
    TableStatus, TimeSlot,
};
pub use stats::BookingStats;
