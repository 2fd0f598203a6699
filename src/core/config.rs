use crate::generator::{GeneratorConfig, UsernamePolicy};
use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "wasatext_embedded";

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_url: String,
    pub database_name: String,
    pub generator: GeneratorConfig,
    pub rng_seed: Option<u64>,
    pub verify: bool,
    pub dry_run: bool,
    pub app_env: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    /// Calls dotenv() automatically, so a local `.env` file is honoured.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let mongodb_url = env::var("MONGODB_URL").unwrap_or_else(|_| {
            warn!("MONGODB_URL not set, using {}", DEFAULT_MONGODB_URL);
            DEFAULT_MONGODB_URL.to_string()
        });

        let database_name =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

        let mut generator = GeneratorConfig::default();

        generator.user_count = parse_var(
            "SEED_USER_COUNT",
            generator.user_count,
            "Invalid SEED_USER_COUNT: must be a positive number",
        )?;

        generator.conversation_count = parse_var(
            "SEED_CONVERSATION_COUNT",
            generator.conversation_count,
            "Invalid SEED_CONVERSATION_COUNT: must be a positive number",
        )?;

        if parse_var(
            "SEED_UNIQUE_USERNAMES",
            false,
            "Invalid SEED_UNIQUE_USERNAMES: must be true or false",
        )? {
            generator.username_policy = UsernamePolicy::Unique;
        }

        let rng_seed = match env::var("SEED_RNG_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| "Invalid SEED_RNG_SEED: must be an unsigned 64-bit number".to_string())?,
            ),
            Err(_) => None,
        };

        let verify = parse_var("SEED_VERIFY", true, "Invalid SEED_VERIFY: must be true or false")?;

        let dry_run = parse_var("SEED_DRY_RUN", false, "Invalid SEED_DRY_RUN: must be true or false")?;

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            mongodb_url,
            database_name,
            generator,
            rng_seed,
            verify,
            dry_run,
            app_env,
        })
    }

    /// Logs the configuration, hiding credentials
    pub fn print_info(&self) {
        info!("Seeder Configuration:");
        info!("   Environment: {}", self.app_env);
        if self.dry_run {
            info!("   Store: in-memory (dry run)");
        } else {
            info!("   Store: {}", Self::mask_url(&self.mongodb_url));
            info!("   Database: {}", self.database_name);
        }
        info!("   Users: {}", self.generator.user_count);
        info!("   Conversations: {}", self.generator.conversation_count);
        info!("   Username policy: {:?}", self.generator.username_policy);
        match self.rng_seed {
            Some(seed) => info!("   RNG seed: {}", seed),
            None => info!("   RNG seed: none (entropy)"),
        }
        info!("   Verify after seeding: {}", self.verify);
    }

    /// Masks the userinfo part of the connection URL
    pub fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.rfind('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.to_string()
    }
}

fn parse_var<T: FromStr>(name: &str, default: T, error: &str) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| error.to_string()),
        Err(_) => Ok(default),
    }
}
