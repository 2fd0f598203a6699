//! Message entity - messages embedded in a conversation, with their reactions and receipts

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::conversation::ParticipantSnapshot;
use super::enums::{MessageType, ReactionType, ReceiptStatus};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    // denormalized copy of the participant, not a reference
    pub sender: ParticipantSnapshot,
    pub content: String,
    pub message_type: MessageType,
    pub timestamp: DateTime,
    pub is_deleted: bool,
    pub reactions: Vec<Reaction>,
    /// One receipt per conversation participant, sender included
    pub receipts: Vec<Receipt>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Reaction {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub reaction_type: ReactionType,
    pub timestamp: DateTime,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Receipt {
    pub user_id: ObjectId,
    pub status: ReceiptStatus,
    pub delivered_at: DateTime,
    // present iff status is `read`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_at: Option<DateTime>,
}
