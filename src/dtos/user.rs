//! User DTOs - users before insertion and the summary reloaded afterwards

use crate::entities::{ParticipantRole, ParticipantSnapshot, User};
use lazy_static::lazy_static;
use mongodb::bson::{DateTime, oid::ObjectId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    /// Lower-case name parts, optionally joined by `_` or `.`, and a numeric suffix
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-z]+[._]?[a-z]+[0-9]+$").unwrap();
}

/// DTO for a new user (no `_id`, the store assigns it)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct CreateUserDTO {
    #[validate(regex(path = *USERNAME_REGEX, message = "Username must be lower-case name parts plus a numeric suffix"))]
    pub username: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Display name cannot be empty"))]
    pub display_name: String,

    pub created_at: DateTime,
    pub last_activity: DateTime,
    pub is_online: bool,
}

impl CreateUserDTO {
    /// Attaches the id assigned by the store
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            display_name: self.display_name,
            created_at: self.created_at,
            last_activity: self.last_activity,
            is_online: self.is_online,
        }
    }
}

/// Projection reloaded after the bulk insert: only what gets embedded
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummaryDTO {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub display_name: String,
}

impl UserSummaryDTO {
    pub fn snapshot(&self, joined_at: DateTime) -> ParticipantSnapshot {
        ParticipantSnapshot {
            user_id: self.id,
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            joined_at,
            role: ParticipantRole::Member,
        }
    }
}

impl From<User> for UserSummaryDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            display_name: value.display_name,
        }
    }
}
