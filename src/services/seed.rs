//! Seed service - drops and repopulates the destination collections

use crate::core::SeedError;
use crate::dtos::{CreateUserDTO, UserSummaryDTO};
use crate::entities::{Conversation, ReceiptStatus};
use crate::generator::{Generator, GeneratorConfig};
use crate::repositories::{Clear, Count, InsertMany, ReadAll};
use crate::services::verify::{Violation, verify_conversations};
use mongodb::bson::oid::ObjectId;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info, instrument};
use validator::Validate;

/// Final counts of a run, echoed to the operator
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedReport {
    pub users: u64,
    pub conversations: u64,
    pub messages: u64,
    pub reactions: u64,
    pub receipts: u64,
    pub read_receipts: u64,
    pub elapsed_ms: u64,
}

impl SeedReport {
    fn tally(&mut self, conversations: &[Conversation]) {
        for message in conversations.iter().flat_map(|c| &c.messages) {
            self.messages += 1;
            self.reactions += message.reactions.len() as u64;
            self.receipts += message.receipts.len() as u64;
            self.read_receipts += message
                .receipts
                .iter()
                .filter(|r| r.status == ReceiptStatus::Read)
                .count() as u64;
        }
    }
}

/// Runs a full seeding pass.
///
/// 1. Check the configuration (nothing is touched when it is invalid)
/// 2. Clear both collections
/// 3. Generate users and insert them in one bulk write
/// 4. Reload id, username and display name into a lookup keyed by id
/// 5. Generate conversations from the lookup and insert them in one bulk write
/// 6. Count what the store holds
///
/// Any store error aborts the run; what was written so far stays, the next
/// run clears it anyway.
#[instrument(
    skip_all,
    fields(
        users = generator.config().user_count,
        conversations = generator.config().conversation_count
    )
)]
pub async fn run<U, C, R>(
    users_repo: &U,
    conversations_repo: &C,
    generator: &mut Generator<R>,
) -> Result<SeedReport, SeedError>
where
    U: Clear + InsertMany<CreateUserDTO> + ReadAll<UserSummaryDTO> + Count,
    C: Clear + InsertMany<Conversation> + Count,
    R: Rng,
{
    let started = Instant::now();
    generator.config().check()?;

    users_repo.clear().await?;
    conversations_repo.clear().await?;
    info!("Cleared users and conversations");

    info!("Generating {} users", generator.config().user_count);
    let users = generator.generate_users();
    for user in &users {
        user.validate()?;
    }
    let inserted = users_repo.insert_many(&users).await?;
    info!("Inserted {} users", inserted);

    // keyed by id; ObjectIds grow with insertion, so iteration follows insertion order
    let lookup: BTreeMap<ObjectId, UserSummaryDTO> = users_repo
        .read_all()
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();
    debug!("Reloaded {} user summaries", lookup.len());
    let population: Vec<UserSummaryDTO> = lookup.into_values().collect();

    info!(
        "Generating {} conversations",
        generator.config().conversation_count
    );
    let conversations = generator.generate_conversations(&population)?;
    let inserted = conversations_repo.insert_many(&conversations).await?;
    info!("Inserted {} conversations", inserted);

    let mut report = SeedReport {
        users: users_repo.count().await?,
        conversations: conversations_repo.count().await?,
        ..SeedReport::default()
    };
    report.tally(&conversations);
    report.elapsed_ms = started.elapsed().as_millis() as u64;

    info!(
        users = report.users,
        conversations = report.conversations,
        messages = report.messages,
        reactions = report.reactions,
        receipts = report.receipts,
        "Population complete in {} ms",
        report.elapsed_ms
    );

    Ok(report)
}

/// Reads every conversation back from the store and verifies it
pub async fn verify_store<C>(
    conversations_repo: &C,
    config: &GeneratorConfig,
) -> Result<Vec<Violation>, SeedError>
where
    C: ReadAll<Conversation>,
{
    let conversations = conversations_repo.read_all().await?;
    let violations = verify_conversations(&conversations, config);
    debug!(
        "Verified {} conversations, {} violations",
        conversations.len(),
        violations.len()
    );
    Ok(violations)
}
