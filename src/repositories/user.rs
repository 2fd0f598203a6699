//! UserRepository - `users` collection on MongoDB

use super::{Clear, Count, InsertMany, ReadAll};
use crate::core::SeedError;
use crate::dtos::{CreateUserDTO, UserSummaryDTO};
use futures::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};
use tracing::debug;

pub const USERS_COLLECTION: &str = "users";

pub struct UserRepository {
    users: Collection<CreateUserDTO>,
}

impl UserRepository {
    pub fn new(db: &Database) -> UserRepository {
        Self {
            users: db.collection(USERS_COLLECTION),
        }
    }
}

impl Clear for UserRepository {
    async fn clear(&self) -> Result<(), SeedError> {
        self.users.drop().await?;
        debug!("Dropped collection '{}'", USERS_COLLECTION);
        Ok(())
    }
}

impl InsertMany<CreateUserDTO> for UserRepository {
    async fn insert_many(&self, data: &[CreateUserDTO]) -> Result<usize, SeedError> {
        // the driver rejects an empty batch
        if data.is_empty() {
            return Ok(0);
        }

        let result = self.users.insert_many(data).await?;
        Ok(result.inserted_ids.len())
    }
}

impl ReadAll<UserSummaryDTO> for UserRepository {
    /// Reloads only the fields embedded in conversations
    async fn read_all(&self) -> Result<Vec<UserSummaryDTO>, SeedError> {
        let summaries = self
            .users
            .clone_with_type::<UserSummaryDTO>()
            .find(doc! {})
            .projection(doc! { "_id": 1, "username": 1, "display_name": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(summaries)
    }
}

impl Count for UserRepository {
    async fn count(&self) -> Result<u64, SeedError> {
        Ok(self.users.count_documents(doc! {}).await?)
    }
}
