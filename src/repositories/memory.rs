//! In-memory repositories - same traits as the MongoDB ones, backed by a map
//!
//! Used for dry runs and by the tests, which need no running database.
//! A repository built with `unreachable()` fails every call like a store
//! that cannot be contacted.

use super::{Clear, Count, InsertMany, ReadAll};
use crate::core::SeedError;
use crate::dtos::{CreateUserDTO, UserSummaryDTO};
use crate::entities::{Conversation, User};
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: DashMap<ObjectId, User>,
    reachable: Reachability,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unreachable() -> Self {
        Self {
            users: DashMap::new(),
            reachable: Reachability::Down,
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.users.iter().map(|entry| entry.value().clone()).collect()
    }
}

impl Clear for MemoryUserRepository {
    async fn clear(&self) -> Result<(), SeedError> {
        self.reachable.check()?;
        self.users.clear();
        Ok(())
    }
}

impl InsertMany<CreateUserDTO> for MemoryUserRepository {
    async fn insert_many(&self, data: &[CreateUserDTO]) -> Result<usize, SeedError> {
        self.reachable.check()?;
        for dto in data {
            let id = ObjectId::new();
            self.users.insert(id, dto.clone().into_user(id));
        }
        Ok(data.len())
    }
}

impl ReadAll<UserSummaryDTO> for MemoryUserRepository {
    async fn read_all(&self) -> Result<Vec<UserSummaryDTO>, SeedError> {
        self.reachable.check()?;
        Ok(self
            .users
            .iter()
            .map(|entry| UserSummaryDTO::from(entry.value().clone()))
            .collect())
    }
}

impl Count for MemoryUserRepository {
    async fn count(&self) -> Result<u64, SeedError> {
        self.reachable.check()?;
        Ok(self.users.len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryConversationRepository {
    conversations: DashMap<ObjectId, Conversation>,
    reachable: Reachability,
}

impl MemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unreachable() -> Self {
        Self {
            conversations: DashMap::new(),
            reachable: Reachability::Down,
        }
    }
}

impl Clear for MemoryConversationRepository {
    async fn clear(&self) -> Result<(), SeedError> {
        self.reachable.check()?;
        self.conversations.clear();
        Ok(())
    }
}

impl InsertMany<Conversation> for MemoryConversationRepository {
    async fn insert_many(&self, data: &[Conversation]) -> Result<usize, SeedError> {
        self.reachable.check()?;
        for conversation in data {
            self.conversations.insert(conversation.id, conversation.clone());
        }
        Ok(data.len())
    }
}

impl ReadAll<Conversation> for MemoryConversationRepository {
    async fn read_all(&self) -> Result<Vec<Conversation>, SeedError> {
        self.reachable.check()?;
        Ok(self
            .conversations
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}

impl Count for MemoryConversationRepository {
    async fn count(&self) -> Result<u64, SeedError> {
        self.reachable.check()?;
        Ok(self.conversations.len() as u64)
    }
}

#[derive(Default, Clone, Copy, PartialEq, Eq)]
enum Reachability {
    #[default]
    Up,
    Down,
}

impl Reachability {
    fn check(&self) -> Result<(), SeedError> {
        match self {
            Reachability::Up => Ok(()),
            Reachability::Down => Err(SeedError::connectivity("Document store unavailable")
                .with_details("in-memory store marked unreachable")),
        }
    }
}
