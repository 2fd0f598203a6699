//! Services module - operations run by the seeder binary
//!
//! - `seed`: clears and repopulates the store
//! - `verify`: structural checks over the generated conversations

pub mod seed;
pub mod verify;

pub use seed::{SeedReport, run, verify_store};
pub use verify::{Violation, ViolationKind, verify_conversations};
