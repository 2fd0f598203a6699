#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use seeder::generator::{Generator, GeneratorConfig};
use seeder::repositories::{MemoryConversationRepository, MemoryUserRepository};

/// Fixed generation instant shared by the tests
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
}

/// Creates a seeded generator for the given population sizes
///
/// # Arguments
/// * `users` - Number of users (U)
/// * `conversations` - Number of conversations (C)
/// * `seed` - RNG seed
pub fn create_test_generator(users: usize, conversations: usize, seed: u64) -> Generator<StdRng> {
    Generator::seeded(
        GeneratorConfig::with_counts(users, conversations),
        seed,
        test_now(),
    )
}

/// Creates an empty in-memory store (users, conversations)
pub fn create_test_store() -> (MemoryUserRepository, MemoryConversationRepository) {
    (
        MemoryUserRepository::new(),
        MemoryConversationRepository::new(),
    )
}
