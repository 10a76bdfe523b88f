//! Process-wide source of home world rolls.
//!
//! One master [`StdRng`] lives in application state. Each request forks its
//! own generator from it, so the lock is never held across an `.await` and a
//! fixed `ROLL_SEED` reproduces the whole sequence of draws.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Roller {
    master: Mutex<StdRng>,
}

impl Roller {
    /// Seed from `seed` when given, otherwise from the thread-local OS-seeded
    /// generator.
    pub fn new(seed: Option<u64>) -> Self {
        let master = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            master: Mutex::new(master),
        }
    }

    /// A private generator for one request.
    pub fn fork(&self) -> StdRng {
        let mut master = self.master.lock().unwrap_or_else(PoisonError::into_inner);
        StdRng::from_rng(&mut *master)
    }
}

impl std::fmt::Debug for Roller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roller").finish_non_exhaustive()
    }
}
