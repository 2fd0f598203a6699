//! Entities module - documents persisted in the store
//!
//! Each top-level entity maps to a collection (`users`, `conversations`);
//! messages, reactions and receipts live embedded inside their conversation.

pub mod conversation;
pub mod enums;
pub mod message;
pub mod user;

// Re-exports
pub use conversation::{Conversation, ParticipantSnapshot};
pub use enums::{ConversationType, MessageType, ParticipantRole, ReactionType, ReceiptStatus};
pub use message::{Message, Reaction, Receipt};
pub use user::User;
