//! Booking attempt statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::models::BookingOutcome;

/// Monotonic counters over booking attempt outcomes.
///
/// A passive observer: the driver feeds it every [`BookingOutcome`] it
/// receives, so `successful + failed` always equals the number of `book`
/// calls made. No reset, no decay.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct BookingStats {
    successful: u64,
    failed: u64,
}

impl BookingStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a single `book` call.
    pub fn record(&mut self, outcome: &BookingOutcome) {
        match outcome {
            BookingOutcome::Booked(_) => self.successful += 1,
            BookingOutcome::InvalidTimeSlot | BookingOutcome::NoTablesAvailable => {
                self.failed += 1;
            }
        }
    }

    #[must_use]
    pub const fn successful(&self) -> u64 {
        self.successful
    }

    #[must_use]
    pub const fn failed(&self) -> u64 {
        self.failed
    }

    /// Both counters as `(successful, failed)`.
    #[must_use]
    pub const fn read(&self) -> (u64, u64) {
        (self.successful, self.failed)
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.successful + self.failed
    }
}

impl fmt::Display for BookingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "successful: {}, failed: {}",
            self.successful, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        assert_eq!(BookingStats::new().read(), (0, 0));
    }

    #[test]
    fn test_record_success() {
        let mut stats = BookingStats::new();
        stats.record(&BookingOutcome::Booked(1));
        assert_eq!(stats.read(), (1, 0));
    }

    #[test]
    fn test_record_failures() {
        let mut stats = BookingStats::new();
        stats.record(&BookingOutcome::InvalidTimeSlot);
        stats.record(&BookingOutcome::NoTablesAvailable);
        assert_eq!(stats.read(), (0, 2));
    }

    #[test]
    fn test_total_matches_call_count() {
        let mut stats = BookingStats::new();
        let outcomes = [
            BookingOutcome::Booked(1),
            BookingOutcome::NoTablesAvailable,
            BookingOutcome::Booked(2),
            BookingOutcome::InvalidTimeSlot,
        ];
        for outcome in &outcomes {
            stats.record(outcome);
        }
        assert_eq!(stats.total(), outcomes.len() as u64);
        assert_eq!(stats.read(), (2, 2));
    }
}
