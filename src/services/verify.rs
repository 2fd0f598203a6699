//! Dataset verification - structural checks over generated conversations
//!
//! Reports every broken property instead of stopping at the first one, so a
//! single pass over the store shows the whole picture.

use crate::entities::{Conversation, ConversationType, ReceiptStatus};
use crate::generator::{Bounds, GeneratorConfig};
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub conversation_id: ObjectId,
    /// Position of the offending message, when the check is per message
    pub message_index: Option<usize>,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    ParticipantCountOutOfRange,
    DuplicateParticipant,
    ParticipantsCountMismatch,
    MessageCountMismatch,
    TypeMismatch,
    TitleMismatch,
    LastMessageMismatch,
    SenderNotParticipant,
    ReactorNotParticipant,
    ReceiptNotParticipant,
    MissingReceipt,
    MessageOutOfOrder,
    ReactionBeforeMessage,
    ReactionDelayOutOfRange,
    DeliveredBeforeMessage,
    DeliveryDelayOutOfRange,
    ReadBeforeDelivered,
    ReadDelayOutOfRange,
    ReadStatusMismatch,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message_index {
            Some(index) => write!(
                f,
                "{:?} in conversation {} at message {}",
                self.kind, self.conversation_id, index
            ),
            None => write!(f, "{:?} in conversation {}", self.kind, self.conversation_id),
        }
    }
}

/// Checks referential integrity, causality, cached counters and receipt
/// completeness of every conversation.
///
/// # Arguments
/// * `conversations` - Conversations as generated or read back from the store
/// * `config` - Participant count and delay bounds the data was generated with
///
/// # Returns
/// Every violation found; empty when the dataset is consistent
pub fn verify_conversations(
    conversations: &[Conversation],
    config: &GeneratorConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    for conversation in conversations {
        verify_conversation(conversation, config, &mut violations);
    }
    violations
}

/// `to - from` lies inside `bounds`, both ends in seconds
fn delay_within(bounds: Bounds, from: DateTime, to: DateTime) -> bool {
    let millis = to.timestamp_millis() - from.timestamp_millis();
    (bounds.min as i64) * 1_000 <= millis
        && millis <= (bounds.max as i64) * 1_000
}

fn verify_conversation(
    conversation: &Conversation,
    config: &GeneratorConfig,
    violations: &mut Vec<Violation>,
) {
    let mut report = |message_index: Option<usize>, kind: ViolationKind| {
        violations.push(Violation {
            conversation_id: conversation.id,
            message_index,
            kind,
        })
    };

    let members: HashSet<ObjectId> = conversation.participants.iter().map(|p| p.user_id).collect();

    // conversation level
    if !config.participants.contains(conversation.participants.len() as u64) {
        report(None, ViolationKind::ParticipantCountOutOfRange);
    }
    if members.len() != conversation.participants.len() {
        report(None, ViolationKind::DuplicateParticipant);
    }
    if conversation.participants_count as usize != conversation.participants.len() {
        report(None, ViolationKind::ParticipantsCountMismatch);
    }
    if conversation.message_count as usize != conversation.messages.len() {
        report(None, ViolationKind::MessageCountMismatch);
    }
    if conversation.conversation_type
        != ConversationType::from_participant_count(conversation.participants.len())
    {
        report(None, ViolationKind::TypeMismatch);
    }
    let expects_title = conversation.conversation_type == ConversationType::Group;
    if conversation.title.is_some() != expects_title {
        report(None, ViolationKind::TitleMismatch);
    }
    let expected_last = conversation
        .messages
        .last()
        .map(|m| m.timestamp)
        .unwrap_or(conversation.created_at);
    if conversation.last_message_at != expected_last {
        report(None, ViolationKind::LastMessageMismatch);
    }

    // message level
    let mut previous = conversation.created_at;
    for (index, message) in conversation.messages.iter().enumerate() {
        let at = Some(index);

        if message.timestamp < previous {
            report(at, ViolationKind::MessageOutOfOrder);
        }
        previous = message.timestamp;

        if !members.contains(&message.sender.user_id) {
            report(at, ViolationKind::SenderNotParticipant);
        }

        for reaction in &message.reactions {
            if !members.contains(&reaction.user_id) {
                report(at, ViolationKind::ReactorNotParticipant);
            }
            if reaction.timestamp < message.timestamp {
                report(at, ViolationKind::ReactionBeforeMessage);
            } else if !delay_within(config.reaction_delay_secs, message.timestamp, reaction.timestamp) {
                report(at, ViolationKind::ReactionDelayOutOfRange);
            }
        }

        let receivers: HashSet<ObjectId> = message.receipts.iter().map(|r| r.user_id).collect();
        if message.receipts.len() != members.len() || receivers != members {
            if receivers.iter().any(|id| !members.contains(id)) {
                report(at, ViolationKind::ReceiptNotParticipant);
            } else {
                report(at, ViolationKind::MissingReceipt);
            }
        }

        for receipt in &message.receipts {
            if receipt.delivered_at < message.timestamp {
                report(at, ViolationKind::DeliveredBeforeMessage);
            } else if !delay_within(config.delivery_delay_secs, message.timestamp, receipt.delivered_at) {
                report(at, ViolationKind::DeliveryDelayOutOfRange);
            }
            match (receipt.status, receipt.read_at) {
                (ReceiptStatus::Read, Some(read_at)) if read_at < receipt.delivered_at => {
                    report(at, ViolationKind::ReadBeforeDelivered)
                }
                (ReceiptStatus::Read, Some(read_at)) => {
                    if !delay_within(config.read_delay_secs, receipt.delivered_at, read_at) {
                        report(at, ViolationKind::ReadDelayOutOfRange);
                    }
                }
                (ReceiptStatus::Delivered, None) => {}
                _ => report(at, ViolationKind::ReadStatusMismatch),
            }
        }
    }
}
