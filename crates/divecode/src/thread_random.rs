use crate::rand::RandSource;
use core::num::NonZeroU16;
use rand::{Rng, rng};

/// A [`RandSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free and safe. This type does **not** store the RNG itself; it
/// simply accesses the thread-local generator on each call, which is why this
/// zero-sized wrapper may be freely shared across threads even though the
/// underlying `ThreadRng` is neither `Send` nor `Sync`.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn salt(&self) -> NonZeroU16 {
        let drawn = rng().random_range(1..=u16::MAX);
        // The range starts at 1, so the fallback never fires.
        NonZeroU16::new(drawn).unwrap_or(NonZeroU16::MIN)
    }
}
