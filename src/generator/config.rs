//! Generator configuration - population sizes and sampling bounds

use crate::core::SeedError;
use rand::Rng;
use validator::{Validate, ValidationError};

/// Smallest population from which a conversation can be formed
pub const MIN_USERS: usize = 2;

/// Inclusive range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

impl Bounds {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.gen_range(self.min..=self.max)
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// What to do when two generated users draw the same username
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernamePolicy {
    /// Keep the random suffix as drawn; duplicates are possible
    #[default]
    AllowCollisions,
    /// Redraw the suffix until the username is unused
    Unique,
}

#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_bounds"))]
pub struct GeneratorConfig {
    #[validate(range(min = 2, message = "At least 2 users are needed to form a conversation"))]
    pub user_count: usize,
    pub conversation_count: usize,

    /// Participants per conversation
    pub participants: Bounds,
    /// Embedded messages per conversation
    pub messages: Bounds,
    /// Clock advance before each message, in seconds
    pub message_step_secs: Bounds,
    /// Reactions per message
    pub reactions: Bounds,
    /// Delay between a message and each of its reactions, in seconds
    pub reaction_delay_secs: Bounds,
    /// Delay between a message and its delivery, in seconds
    pub delivery_delay_secs: Bounds,
    /// Delay between delivery and read, in seconds
    pub read_delay_secs: Bounds,

    #[validate(range(min = 0.0, max = 1.0, message = "Read probability must be within [0, 1]"))]
    pub read_probability: f64,
    #[validate(range(min = 0.0, max = 1.0, message = "Online probability must be within [0, 1]"))]
    pub online_probability: f64,

    pub user_created_window_days: u32,
    pub user_activity_window_days: u32,
    pub conversation_window_days: u32,

    pub username_policy: UsernamePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            user_count: 200,
            conversation_count: 80,
            participants: Bounds::new(2, 6),
            messages: Bounds::new(50, 250),
            message_step_secs: Bounds::new(1, 300),
            reactions: Bounds::new(0, 3),
            reaction_delay_secs: Bounds::new(1, 60),
            delivery_delay_secs: Bounds::new(1, 15),
            read_delay_secs: Bounds::new(10, 600),
            read_probability: 0.75,
            online_probability: 0.20,
            user_created_window_days: 180,
            user_activity_window_days: 14,
            conversation_window_days: 120,
            username_policy: UsernamePolicy::AllowCollisions,
        }
    }
}

impl GeneratorConfig {
    pub fn with_counts(user_count: usize, conversation_count: usize) -> Self {
        Self {
            user_count,
            conversation_count,
            ..Self::default()
        }
    }

    /// Checks the configuration before anything is written.
    ///
    /// A population below [`MIN_USERS`] is a constraint error; any other
    /// inconsistency is reported as a validation error.
    pub fn check(&self) -> Result<(), SeedError> {
        if self.user_count < MIN_USERS {
            return Err(SeedError::constraint("Not enough users to pick participants")
                .with_details(format!(
                    "requested {} users, at least {} are needed",
                    self.user_count, MIN_USERS
                )));
        }
        self.validate()?;
        Ok(())
    }
}

fn validate_bounds(config: &GeneratorConfig) -> Result<(), ValidationError> {
    let all = [
        config.participants,
        config.messages,
        config.message_step_secs,
        config.reactions,
        config.reaction_delay_secs,
        config.delivery_delay_secs,
        config.read_delay_secs,
    ];
    if !all.iter().all(Bounds::is_ordered) {
        return Err(ValidationError::new("bounds_not_ordered"));
    }
    if config.participants.min < MIN_USERS as u64 {
        return Err(ValidationError::new("participants_below_two"));
    }
    // `range` lets NaN through
    if !config.read_probability.is_finite() || !config.online_probability.is_finite() {
        return Err(ValidationError::new("probability_not_finite"));
    }
    Ok(())
}
