//! The booking ledger: slot-by-table occupancy and timed release.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use std::collections::VecDeque;

use super::config::LedgerConfig;
use super::errors::ConfigResult;
use super::events::BookingEvent;
use super::models::{
    BookingOutcome, BookingRequest, LedgerView, SlotStatus, TableHold, TableId, TableStatus,
    TimeSlot,
};

/// The core booking engine.
///
/// Occupancy lives in a fixed two-dimensional table indexed by slot index
/// and table index; each cell holds an optional [`TableHold`] combining the
/// occupant with its release instant. The slot set and table count are both
/// small and fixed, so no hashing is involved and a hold can never exist
/// without a release time.
///
/// The ledger is single-actor: mutating operations take `&mut self`, and the
/// current time is always an injected argument, never read from a system
/// clock.
#[derive(Debug)]
pub struct BookingLedger {
    slots: Vec<TimeSlot>,
    total_tables: usize,
    hold: Duration,
    /// `cells[slot_idx][table_idx]` is `Some` while table `table_idx + 1`
    /// is held for slot `slot_idx`.
    cells: Vec<Vec<Option<TableHold>>>,
    /// Events queued since the last drain, in occurrence order.
    events: VecDeque<BookingEvent>,
}

impl BookingLedger {
    /// Create a ledger from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`super::errors::ConfigError`] if the configuration fails
    /// [`LedgerConfig::validate`].
    pub fn new(config: LedgerConfig) -> ConfigResult<Self> {
        config.validate()?;
        let hold = config.hold();
        let LedgerConfig {
            total_tables,
            slots,
            ..
        } = config;
        let cells = vec![vec![None; total_tables]; slots.len()];
        Ok(Self {
            slots,
            total_tables,
            hold,
            cells,
            events: VecDeque::new(),
        })
    }

    /// Attempt to seat a guest at the requested slot.
    ///
    /// Tables are scanned in ascending order and the lowest-numbered free
    /// table wins, regardless of request order. On success the table is held
    /// until `now` plus the configured hold duration and a
    /// [`BookingEvent::TableBooked`] is queued. Failed attempts mutate
    /// nothing.
    pub fn book(&mut self, request: &BookingRequest, now: DateTime<Utc>) -> BookingOutcome {
        let Some(slot_idx) = self.slot_index(&request.slot) else {
            debug!("rejected {}: unknown slot {}", request.name, request.slot);
            return BookingOutcome::InvalidTimeSlot;
        };

        let row = &mut self.cells[slot_idx];
        let Some(table_idx) = row.iter().position(Option::is_none) else {
            debug!("rejected {}: {} fully booked", request.name, request.slot);
            return BookingOutcome::NoTablesAvailable;
        };

        row[table_idx] = Some(TableHold {
            guest: request.name.clone(),
            release_at: now + self.hold,
        });
        let table = table_idx + 1;
        info!("{} seated at table #{table} for {}", request.name, request.slot);
        self.events.push_back(BookingEvent::TableBooked {
            guest: request.name.clone(),
            vip: request.vip,
            slot: request.slot.clone(),
            table,
        });
        BookingOutcome::Booked(table)
    }

    /// Free every table whose hold has lapsed at `now`.
    ///
    /// Queues one [`BookingEvent::TableReleased`] per freed table and
    /// returns the freed `(slot, table)` pairs. Safe to call at any cadence;
    /// with nothing expired it is a no-op returning an empty list.
    pub fn release_expired(&mut self, now: DateTime<Utc>) -> Vec<(TimeSlot, TableId)> {
        let mut freed = Vec::new();
        for (slot_idx, row) in self.cells.iter_mut().enumerate() {
            for (table_idx, cell) in row.iter_mut().enumerate() {
                if cell.as_ref().is_some_and(|hold| hold.release_at <= now) {
                    *cell = None;
                    let slot = self.slots[slot_idx].clone();
                    let table = table_idx + 1;
                    self.events.push_back(BookingEvent::TableReleased {
                        slot: slot.clone(),
                        table,
                    });
                    freed.push((slot, table));
                }
            }
        }
        if !freed.is_empty() {
            info!("released {} expired table hold(s)", freed.len());
        }
        freed
    }

    /// A read-only snapshot of every slot and table.
    ///
    /// Reflects state strictly as of the last mutation; holds past their
    /// release time stay visible until [`Self::release_expired`] is called.
    #[must_use]
    pub fn status_snapshot(&self) -> LedgerView {
        LedgerView {
            slots: self
                .slots
                .iter()
                .zip(&self.cells)
                .map(|(slot, row)| SlotStatus {
                    slot: slot.clone(),
                    tables: row
                        .iter()
                        .enumerate()
                        .map(|(table_idx, cell)| TableStatus {
                            table: table_idx + 1,
                            occupant: cell.as_ref().map(|hold| hold.guest.clone()),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Drain all queued events in occurrence order.
    pub fn drain_events(&mut self) -> VecDeque<BookingEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn total_tables(&self) -> usize {
        self.total_tables
    }

    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    #[must_use]
    pub fn hold(&self) -> Duration {
        self.hold
    }

    fn slot_index(&self, slot: &TimeSlot) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::errors::ConfigError;
    use crate::booking::models::GuestName;
    use chrono::TimeZone;

    fn service_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 7, 17, 30, 0).unwrap()
    }

    fn ledger(total_tables: usize, slots: &[&str]) -> BookingLedger {
        let config = LedgerConfig {
            total_tables,
            hold_secs: 30,
            slots: slots.iter().map(|s| TimeSlot::new(s)).collect(),
        };
        BookingLedger::new(config).unwrap()
    }

    fn request(name: &str, slot: &str) -> BookingRequest {
        BookingRequest::new(name, slot, false)
    }

    // === Construction Tests ===

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = LedgerConfig::with_tables(0);
        assert_eq!(BookingLedger::new(config).err(), Some(ConfigError::NoTables));
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ledger(3, &["18:00", "18:30"]);
        assert_eq!(ledger.status_snapshot().occupied_count(), 0);
    }

    // === Booking Tests ===

    #[test]
    fn test_fill_slot_to_capacity_ascending() {
        let mut ledger = ledger(4, &["18:00"]);
        let t0 = service_start();
        for expected_table in 1..=4 {
            let guest = format!("guest{expected_table}");
            let outcome = ledger.book(&request(&guest, "18:00"), t0);
            assert_eq!(outcome, BookingOutcome::Booked(expected_table));
        }
        let outcome = ledger.book(&request("latecomer", "18:00"), t0);
        assert_eq!(outcome, BookingOutcome::NoTablesAvailable);
    }

    #[test]
    fn test_unknown_slot_never_mutates() {
        let mut ledger = ledger(2, &["18:00"]);
        let before = ledger.status_snapshot();
        let outcome = ledger.book(&request("Oleh", "17:00"), service_start());
        assert_eq!(outcome, BookingOutcome::InvalidTimeSlot);
        assert_eq!(ledger.status_snapshot(), before);
        assert!(ledger.drain_events().is_empty());
    }

    #[test]
    fn test_full_slot_never_mutates() {
        let mut ledger = ledger(1, &["18:00"]);
        let t0 = service_start();
        ledger.book(&request("Maria", "18:00"), t0);
        let before = ledger.status_snapshot();
        ledger.drain_events();

        let outcome = ledger.book(&request("Dmytro", "18:00"), t0);
        assert_eq!(outcome, BookingOutcome::NoTablesAvailable);
        assert_eq!(ledger.status_snapshot(), before);
        assert!(ledger.drain_events().is_empty());
    }

    #[test]
    fn test_slots_are_independent() {
        let mut ledger = ledger(1, &["18:00", "18:30"]);
        let t0 = service_start();
        assert_eq!(
            ledger.book(&request("Iryna", "18:00"), t0),
            BookingOutcome::Booked(1)
        );
        assert_eq!(
            ledger.book(&request("Anton", "18:30"), t0),
            BookingOutcome::Booked(1)
        );
    }

    #[test]
    fn test_lowest_free_table_wins() {
        // Occupy only table 2 by staggering bookings and expiring the first.
        let mut ledger = ledger(3, &["19:00"]);
        let t0 = service_start();
        ledger.book(&request("early", "19:00"), t0);
        ledger.book(&request("late", "19:00"), t0 + Duration::seconds(100));
        let freed = ledger.release_expired(t0 + Duration::seconds(30));
        assert_eq!(freed, vec![(TimeSlot::new("19:00"), 1)]);

        // Tables 1 and 3 free, 2 held: the next booking takes 1, then 3.
        let now = t0 + Duration::seconds(101);
        assert_eq!(
            ledger.book(&request("next", "19:00"), now),
            BookingOutcome::Booked(1)
        );
        assert_eq!(
            ledger.book(&request("after", "19:00"), now),
            BookingOutcome::Booked(3)
        );
    }

    // === Release Tests ===

    #[test]
    fn test_release_before_expiry_is_noop() {
        let mut ledger = ledger(2, &["18:00"]);
        let t0 = service_start();
        ledger.book(&request("Yulia", "18:00"), t0);
        let before = ledger.status_snapshot();

        let freed = ledger.release_expired(t0 + Duration::seconds(29));
        assert!(freed.is_empty());
        assert_eq!(ledger.status_snapshot(), before);
    }

    #[test]
    fn test_release_exactly_at_expiry() {
        let mut ledger = ledger(2, &["18:00"]);
        let t0 = service_start();
        ledger.book(&request("Bohdan", "18:00"), t0);

        let freed = ledger.release_expired(t0 + Duration::seconds(30));
        assert_eq!(freed, vec![(TimeSlot::new("18:00"), 1)]);
        assert_eq!(ledger.status_snapshot().occupied_count(), 0);
    }

    #[test]
    fn test_release_frees_only_expired_holds() {
        let mut ledger = ledger(2, &["18:00", "20:00"]);
        let t0 = service_start();
        ledger.book(&request("Natalia", "18:00"), t0);
        ledger.book(&request("Maksym", "20:00"), t0 + Duration::seconds(20));

        let freed = ledger.release_expired(t0 + Duration::seconds(30));
        assert_eq!(freed, vec![(TimeSlot::new("18:00"), 1)]);

        let snapshot = ledger.status_snapshot();
        assert_eq!(snapshot.occupied_count(), 1);
        assert_eq!(
            snapshot.slots[1].tables[0].occupant,
            Some(GuestName::new("Maksym"))
        );
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut ledger = ledger(2, &["18:00"]);
        let t0 = service_start();
        ledger.book(&request("Oksana", "18:00"), t0);

        let now = t0 + Duration::seconds(31);
        assert_eq!(ledger.release_expired(now).len(), 1);
        assert!(ledger.release_expired(now).is_empty());
    }

    #[test]
    fn test_released_table_is_bookable_again() {
        let mut ledger = ledger(1, &["18:00"]);
        let t0 = service_start();
        ledger.book(&request("first", "18:00"), t0);
        ledger.release_expired(t0 + Duration::seconds(31));

        let outcome = ledger.book(&request("second", "18:00"), t0 + Duration::seconds(32));
        assert_eq!(outcome, BookingOutcome::Booked(1));
    }

    // === Snapshot Tests ===

    #[test]
    fn test_snapshot_does_not_expire_holds() {
        let mut ledger = ledger(1, &["18:00"]);
        let t0 = service_start();
        ledger.book(&request("lingerer", "18:00"), t0);

        // Well past the hold, but no release call has been made yet.
        let snapshot = ledger.status_snapshot();
        assert_eq!(snapshot.occupied_count(), 1);
    }

    #[test]
    fn test_snapshot_covers_every_slot_and_table() {
        let ledger = ledger(3, &["18:00", "18:30"]);
        let snapshot = ledger.status_snapshot();
        assert_eq!(snapshot.slots.len(), 2);
        assert!(snapshot.slots.iter().all(|slot| slot.tables.len() == 3));
        assert_eq!(snapshot.slots[0].tables[2].table, 3);
    }

    // === Event Tests ===

    #[test]
    fn test_events_queue_in_occurrence_order() {
        let mut ledger = ledger(1, &["18:00"]);
        let t0 = service_start();
        ledger.book(&BookingRequest::new("Olena", "18:00", true), t0);
        ledger.release_expired(t0 + Duration::seconds(30));

        let events: Vec<_> = ledger.drain_events().into();
        assert_eq!(
            events,
            vec![
                BookingEvent::TableBooked {
                    guest: GuestName::new("Olena"),
                    vip: true,
                    slot: TimeSlot::new("18:00"),
                    table: 1,
                },
                BookingEvent::TableReleased {
                    slot: TimeSlot::new("18:00"),
                    table: 1,
                },
            ]
        );
        assert!(ledger.drain_events().is_empty());
    }
}
