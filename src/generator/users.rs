//! User generation

use super::config::UsernamePolicy;
use super::corpus::{EMAIL_DOMAIN, FIRST_NAMES, LAST_NAMES, USERNAME_SEPARATORS};
use super::{Generator, pick};
use crate::dtos::CreateUserDTO;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

const SUFFIX_MIN: u32 = 10;
const SUFFIX_MAX: u32 = 999;
// redraws before falling back to a counter past the random range
const UNIQUE_ATTEMPTS: usize = 16;

impl<R: Rng> Generator<R> {
    /// Generates `user_count` users ready for a single bulk insert.
    pub fn generate_users(&mut self) -> Vec<CreateUserDTO> {
        let count = self.config.user_count;
        let mut taken = HashSet::with_capacity(count);
        let mut users = Vec::with_capacity(count);

        for _ in 0..count {
            let username = self.generate_username(&mut taken);
            users.push(CreateUserDTO {
                email: format!("{}@{}", username, EMAIL_DOMAIN),
                display_name: username.clone(),
                username,
                created_at: self.random_time_within_days(self.config.user_created_window_days),
                last_activity: self.random_time_within_days(self.config.user_activity_window_days),
                is_online: self.rng.gen_bool(self.config.online_probability),
            });
        }

        debug!("Generated {} users ({} distinct usernames)", users.len(), taken.len());
        users
    }

    fn generate_username(&mut self, taken: &mut HashSet<String>) -> String {
        let first = pick(&mut self.rng, FIRST_NAMES).to_lowercase();
        let last = pick(&mut self.rng, LAST_NAMES).to_lowercase();
        let separator = pick(&mut self.rng, USERNAME_SEPARATORS);
        let base = format!("{}{}{}", first, separator, last);

        let mut username = format!("{}{}", base, self.rng.gen_range(SUFFIX_MIN..=SUFFIX_MAX));

        if self.config.username_policy == UsernamePolicy::Unique {
            let mut attempts = 1;
            while taken.contains(&username) && attempts < UNIQUE_ATTEMPTS {
                username = format!("{}{}", base, self.rng.gen_range(SUFFIX_MIN..=SUFFIX_MAX));
                attempts += 1;
            }
            // every suffix in the random range may be taken: count upwards
            let mut counter = SUFFIX_MAX + 1;
            while taken.contains(&username) {
                username = format!("{}{}", base, counter);
                counter += 1;
            }
        }

        taken.insert(username.clone());
        username
    }
}

#[cfg(test)]
mod tests {
    use crate::dtos::USERNAME_REGEX;
    use crate::generator::{Generator, GeneratorConfig, UsernamePolicy};
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use validator::Validate;

    fn generator(config: GeneratorConfig) -> Generator<rand::rngs::StdRng> {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        Generator::seeded(config, 42, now)
    }

    #[test]
    fn users_are_valid_and_derived_from_username() {
        let mut generator = generator(GeneratorConfig::with_counts(50, 0));
        let users = generator.generate_users();

        assert_eq!(users.len(), 50);
        for user in &users {
            assert!(user.validate().is_ok(), "invalid user {:?}", user);
            assert!(USERNAME_REGEX.is_match(&user.username));
            assert_eq!(user.display_name, user.username);
            assert_eq!(user.email, format!("{}@example.com", user.username));
        }
    }

    #[test]
    fn timestamps_fall_inside_their_windows() {
        let mut generator = generator(GeneratorConfig::with_counts(100, 0));
        let now_ms = generator.now().timestamp_millis();
        let day_ms = 24 * 60 * 60 * 1000_i64;

        for user in generator.generate_users() {
            let created = user.created_at.timestamp_millis();
            let active = user.last_activity.timestamp_millis();
            assert!(created <= now_ms && created >= now_ms - 180 * day_ms);
            assert!(active <= now_ms && active >= now_ms - 14 * day_ms);
        }
    }

    #[test]
    fn unique_policy_never_repeats_usernames() {
        // more users than the name pools can cover without collisions
        let config = GeneratorConfig {
            username_policy: UsernamePolicy::Unique,
            ..GeneratorConfig::with_counts(5_000, 0)
        };
        let users = generator(config).generate_users();

        let distinct: HashSet<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(distinct.len(), users.len());
    }

    #[test]
    fn online_share_follows_probability() {
        let config = GeneratorConfig {
            online_probability: 0.0,
            ..GeneratorConfig::with_counts(30, 0)
        };
        assert!(generator(config).generate_users().iter().all(|u| !u.is_online));

        let config = GeneratorConfig {
            online_probability: 1.0,
            ..GeneratorConfig::with_counts(30, 0)
        };
        assert!(generator(config).generate_users().iter().all(|u| u.is_online));
    }
}
