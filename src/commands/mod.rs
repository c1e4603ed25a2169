//! Command implementations

pub mod check;
pub mod define;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use define::{DefineResult, define_word};
pub use simple::{apply_guess, run_simple};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source for secret selection: seeded for reproducible sessions, OS entropy otherwise
#[must_use]
pub fn session_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
