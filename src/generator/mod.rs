//! Synthetic dataset generator
//!
//! Builds users and conversations for the embedded schema: every
//! conversation carries its messages, and every message its reactions and
//! one receipt per participant. Cardinalities and content are random;
//! chronological order and participant references are guaranteed.
//!
//! The random source and the generation instant are injected, so a seeded
//! generator with a fixed `now` reproduces the same dataset (store ids aside).

pub mod config;
pub mod conversations;
pub mod corpus;
pub mod users;

pub use config::{Bounds, GeneratorConfig, MIN_USERS, UsernamePolicy};

use chrono::{DateTime, Duration, Utc};
use mongodb::bson;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Generator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
    now: DateTime<Utc>,
}

impl<R: Rng> Generator<R> {
    /// # Arguments
    /// * `config` - Population sizes and sampling bounds
    /// * `rng` - Random source used for every choice
    /// * `now` - Generation instant; all trailing windows end here
    pub fn new(config: GeneratorConfig, rng: R, now: DateTime<Utc>) -> Self {
        Self { config, rng, now }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Uniform instant in `[now - days, now]`, millisecond precision
    fn random_chrono_within_days(&mut self, days: u32) -> DateTime<Utc> {
        let window_ms = Duration::days(days as i64).num_milliseconds();
        let offset_ms = self.rng.gen_range(0..=window_ms);
        self.now - Duration::milliseconds(offset_ms)
    }

    fn random_time_within_days(&mut self, days: u32) -> bson::DateTime {
        let at = self.random_chrono_within_days(days);
        bson_time(at)
    }
}

impl Generator<StdRng> {
    /// Reproducible generator
    pub fn seeded(config: GeneratorConfig, seed: u64, now: DateTime<Utc>) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed), now)
    }

    pub fn from_entropy(config: GeneratorConfig) -> Self {
        Self::new(config, StdRng::from_entropy(), Utc::now())
    }
}

pub(crate) fn bson_time(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(at.timestamp_millis())
}

/// Uniform choice; callers only pass non-empty pools
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
