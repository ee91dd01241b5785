//! Randomized guest queue generation.

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cmp::Reverse;

use crate::booking::models::{BookingRequest, GuestName, TimeSlot};

/// Names drawn from when generating a random guest queue.
pub const GUEST_ROSTER: [&str; 10] = [
    "Oleh", "Maria", "Dmytro", "Iryna", "Anton", "Oksana", "Yulia", "Bohdan", "Natalia", "Maksym",
];

/// Bounds for the random queue length, inclusive.
const MIN_QUEUE_LEN: usize = 5;
const MAX_QUEUE_LEN: usize = 10;

/// Chance that a generated guest is a VIP.
const VIP_PROBABILITY: f64 = 0.5;

/// Produces randomized, VIP-first guest queues.
pub struct QueueGenerator {
    rng: StdRng,
}

impl QueueGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A generator with a fixed seed, for reproducible sessions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a queue of 5 to 10 guests requesting slots from `slots`,
    /// already sorted VIP-first. Returns an empty queue if `slots` is empty.
    pub fn generate(&mut self, slots: &[TimeSlot]) -> Vec<BookingRequest> {
        if slots.is_empty() {
            return Vec::new();
        }

        let count = self.rng.random_range(MIN_QUEUE_LEN..=MAX_QUEUE_LEN);
        let mut queue = Vec::with_capacity(count);
        for _ in 0..count {
            let name = GUEST_ROSTER[self.rng.random_range(0..GUEST_ROSTER.len())];
            let slot = slots[self.rng.random_range(0..slots.len())].clone();
            let vip = self.rng.random_bool(VIP_PROBABILITY);
            queue.push(BookingRequest {
                name: GuestName::new(name),
                slot,
                vip,
            });
        }

        sort_vip_first(&mut queue);
        queue
    }
}

impl Default for QueueGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort a queue VIP-first, preserving arrival order within each class.
pub fn sort_vip_first(queue: &mut [BookingRequest]) {
    queue.sort_by_key(|request| Reverse(request.vip));
}
