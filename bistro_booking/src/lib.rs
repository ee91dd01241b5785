//! # Bistro Booking
//!
//! A restaurant table-booking engine with timed table release.
//!
//! This library provides the core booking implementation: a ledger mapping
//! evening time slots to numbered tables, deterministic first-free table
//! assignment, and automatic release of held tables once their hold expires.
//! All timing is injected by the caller, so the engine is fully deterministic
//! and can be driven identically by a console UI, a test harness, or a
//! network service.
//!
//! ## Architecture
//!
//! A single logical actor drives the ledger through three operations:
//!
//! - **book**: assign the lowest-numbered free table for a requested slot
//! - **release_expired**: free every table whose hold has passed the
//!   supplied clock reading
//! - **status_snapshot**: a read-only view of every slot and table
//!
//! State changes queue [`booking::BookingEvent`]s that the driver drains and
//! renders; booking attempt outcomes feed [`booking::BookingStats`].
//!
//! ## Core Modules
//!
//! - [`booking`]: ledger, events, statistics, and configuration
//! - [`queue`]: randomized VIP-first guest queue generation
//!
//! ## Example
//!
//! ```
//! use bistro_booking::{BookingLedger, LedgerConfig};
//! use chrono::Utc;
//!
//! let mut ledger =
//!     BookingLedger::new(LedgerConfig::default()).expect("default config is valid");
//! let freed = ledger.release_expired(Utc::now());
//! assert!(freed.is_empty());
//! ```

/// Core booking engine: ledger, events, statistics, and configuration.
pub mod booking;
pub use booking::{
    BookingEvent, BookingLedger, BookingOutcome, BookingRequest, BookingStats, ConfigError,
    LedgerConfig,
    constants::{self, DEFAULT_HOLD_SECS, DEFAULT_TOTAL_TABLES},
    models::{self, GuestName, LedgerView, TableId, TimeSlot},
};

/// Guest queue generation (driver collaborator).
pub mod queue;
pub use queue::{QueueGenerator, sort_vip_first};
