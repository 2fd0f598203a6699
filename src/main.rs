use seeder::core::{Config, SeedState};
use seeder::dtos::{CreateUserDTO, UserSummaryDTO};
use seeder::entities::Conversation;
use seeder::generator::Generator;
use seeder::repositories::{
    Clear, Count, InsertMany, MemoryConversationRepository, MemoryUserRepository, ReadAll,
};
use seeder::services::{SeedReport, Violation, run, verify_store};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    config.print_info();

    info!("Starting embedded schema population");

    let mut generator = match config.rng_seed {
        Some(seed) => Generator::seeded(config.generator.clone(), seed, chrono::Utc::now()),
        None => Generator::from_entropy(config.generator.clone()),
    };

    let (report, violations) = if config.dry_run {
        let users = MemoryUserRepository::new();
        let conversations = MemoryConversationRepository::new();
        seed_and_verify(&users, &conversations, &mut generator, &config).await?
    } else {
        let state = SeedState::connect(&config).await?;
        seed_and_verify(&state.user, &state.conversation, &mut generator, &config).await?
    };

    println!("{}", serde_json::to_string(&report)?);

    if let Some(violations) = violations {
        if !violations.is_empty() {
            for violation in &violations {
                warn!("{}", violation);
            }
            error!("Verification failed with {} violations", violations.len());
            return Err(format!("{} integrity violations found", violations.len()).into());
        }
        info!("Verification passed");
    }

    Ok(())
}

async fn seed_and_verify<U, C>(
    users: &U,
    conversations: &C,
    generator: &mut Generator<rand::rngs::StdRng>,
    config: &Config,
) -> Result<(SeedReport, Option<Vec<Violation>>), Box<dyn std::error::Error>>
where
    U: Clear + InsertMany<CreateUserDTO> + ReadAll<UserSummaryDTO> + Count,
    C: Clear + InsertMany<Conversation> + ReadAll<Conversation> + Count,
{
    let report = run(users, conversations, generator).await?;

    let violations = if config.verify {
        Some(verify_store(conversations, &config.generator).await?)
    } else {
        None
    };

    Ok((report, violations))
}
