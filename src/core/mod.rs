//! Core Module - infrastructure components of the seeder
//!
//! - Configuration
//! - Error handling
//! - Store state

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{ErrorKind, SeedError};
pub use state::SeedState;
