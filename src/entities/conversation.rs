//! Conversation entity - embedded schema: a conversation owns its messages

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::enums::{ConversationType, ParticipantRole};
use super::message::Message;

/// Participant snapshot - copy of the user fields needed at read time,
/// embedded so that reading a conversation never joins on `users`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParticipantSnapshot {
    pub user_id: ObjectId,
    pub username: String,
    pub display_name: String,
    pub joined_at: DateTime,
    pub role: ParticipantRole,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Conversation {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    // `type` is a keyword, renamed on the wire only
    #[serde(rename = "type")]
    pub conversation_type: ConversationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub participants: Vec<ParticipantSnapshot>,
    pub participants_count: u32,
    pub created_at: DateTime,
    pub message_count: u32,
    pub last_message_at: DateTime,
    pub is_archived: bool,
    pub messages: Vec<Message>,
}
