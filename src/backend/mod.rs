//! Collision backends shipped with this crate.

pub use self::brute_force::{BruteForceBackend, BruteForceDetector, BruteForceObject};

mod brute_force;
