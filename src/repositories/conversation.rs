//! ConversationRepository - `conversations` collection on MongoDB
//!
//! Each document carries its whole message history embedded, so a single
//! `insert_many` writes every message, reaction and receipt of the run.

use super::{Clear, Count, InsertMany, ReadAll};
use crate::core::SeedError;
use crate::entities::Conversation;
use futures::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};
use tracing::debug;

pub const CONVERSATIONS_COLLECTION: &str = "conversations";

pub struct ConversationRepository {
    conversations: Collection<Conversation>,
}

impl ConversationRepository {
    pub fn new(db: &Database) -> ConversationRepository {
        Self {
            conversations: db.collection(CONVERSATIONS_COLLECTION),
        }
    }
}

impl Clear for ConversationRepository {
    async fn clear(&self) -> Result<(), SeedError> {
        self.conversations.drop().await?;
        debug!("Dropped collection '{}'", CONVERSATIONS_COLLECTION);
        Ok(())
    }
}

impl InsertMany<Conversation> for ConversationRepository {
    async fn insert_many(&self, data: &[Conversation]) -> Result<usize, SeedError> {
        if data.is_empty() {
            return Ok(0);
        }

        let result = self.conversations.insert_many(data).await?;
        Ok(result.inserted_ids.len())
    }
}

impl ReadAll<Conversation> for ConversationRepository {
    async fn read_all(&self) -> Result<Vec<Conversation>, SeedError> {
        let conversations = self
            .conversations
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(conversations)
    }
}

impl Count for ConversationRepository {
    async fn count(&self) -> Result<u64, SeedError> {
        Ok(self.conversations.count_documents(doc! {}).await?)
    }
}
