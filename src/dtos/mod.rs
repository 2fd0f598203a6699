//! DTOs module - Data Transfer Objects
//!
//! DTOs separate what the generator produces or reads back from the
//! documents actually stored (entities).

pub mod user;

pub use user::{CreateUserDTO, USERNAME_REGEX, UserSummaryDTO};
