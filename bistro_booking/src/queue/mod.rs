//! Guest queue module providing randomized queue generation.
//!
//! This module implements the queue-side collaborator of the booking
//! engine:
//! - Random guest queues drawn from a fixed name roster
//! - Stable VIP-first ordering (arrival order preserved within a class)
//! - Seedable generation for reproducible sessions
//!
//! Ordering is a courtesy to VIP guests only; the ledger stays correct for
//! any permutation of requests.

pub mod generator;

pub use generator::{GUEST_ROSTER, QueueGenerator, sort_vip_first};
