//! Seeder library - synthetic dataset for the embedded messaging schema
//!
//! Exposes the modules used by the `populate-embedded` binary and by the tests.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod generator;
pub mod repositories;
pub mod services;

// Re-export of the main types
pub use crate::core::{Config, ErrorKind, SeedError, SeedState};
pub use generator::{Generator, GeneratorConfig};
pub use services::{SeedReport, run, verify_store};
