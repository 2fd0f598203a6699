//! Conversation generation - participants, messages, reactions and receipts

use super::config::{Bounds, MIN_USERS};
use super::corpus::{GROUP_TITLES, MESSAGES};
use super::{Generator, bson_time, pick};
use crate::core::SeedError;
use crate::dtos::UserSummaryDTO;
use crate::entities::{
    Conversation, ConversationType, Message, MessageType, ParticipantSnapshot, Reaction,
    ReactionType, Receipt, ReceiptStatus,
};
use chrono::{DateTime, Duration, Utc};
use mongodb::bson::oid::ObjectId;
use rand::Rng;
use rand::seq::SliceRandom;

impl<R: Rng> Generator<R> {
    /// Draws the participants of one conversation.
    ///
    /// A single draw without replacement, so it terminates for any population.
    /// The participant count is capped by the population size.
    ///
    /// # Returns
    /// * `Ok(Vec<UserSummaryDTO>)` - Between 2 and 6 distinct users
    /// * `Err(SeedError)` - Constraint error when fewer than 2 users exist
    pub fn sample_participants(
        &mut self,
        users: &[UserSummaryDTO],
    ) -> Result<Vec<UserSummaryDTO>, SeedError> {
        if users.len() < MIN_USERS {
            return Err(SeedError::constraint("Not enough users to pick participants")
                .with_details(format!(
                    "population has {} users, at least {} are needed",
                    users.len(),
                    MIN_USERS
                )));
        }

        let max = (self.config.participants.max as usize).min(users.len());
        let min = (self.config.participants.min as usize).min(max);
        let count = self.rng.gen_range(min..=max);

        Ok(users
            .choose_multiple(&mut self.rng, count)
            .cloned()
            .collect())
    }

    pub fn generate_conversation(
        &mut self,
        users: &[UserSummaryDTO],
    ) -> Result<Conversation, SeedError> {
        let picked = self.sample_participants(users)?;
        let conversation_type = ConversationType::from_participant_count(picked.len());

        let created_at = self.random_chrono_within_days(self.config.conversation_window_days);
        let joined_at = bson_time(created_at);
        let participants: Vec<ParticipantSnapshot> =
            picked.iter().map(|user| user.snapshot(joined_at)).collect();

        let title = match conversation_type {
            ConversationType::Group => Some(pick(&mut self.rng, GROUP_TITLES).to_string()),
            ConversationType::Direct => None,
        };

        let message_count = self.config.messages.sample(&mut self.rng) as usize;
        let mut messages = Vec::with_capacity(message_count);
        let mut clock = created_at;
        for _ in 0..message_count {
            clock += self.seconds(self.config.message_step_secs);
            messages.push(self.generate_message(&participants, clock));
        }

        let last_message_at = messages
            .last()
            .map(|message| message.timestamp)
            .unwrap_or(joined_at);

        Ok(Conversation {
            id: ObjectId::new(),
            conversation_type,
            title,
            participants_count: participants.len() as u32,
            participants,
            created_at: joined_at,
            message_count: messages.len() as u32,
            last_message_at,
            is_archived: false,
            messages,
        })
    }

    /// Generates `conversation_count` conversations over the given population
    pub fn generate_conversations(
        &mut self,
        users: &[UserSummaryDTO],
    ) -> Result<Vec<Conversation>, SeedError> {
        (0..self.config.conversation_count)
            .map(|_| self.generate_conversation(users))
            .collect()
    }

    fn generate_message(
        &mut self,
        participants: &[ParticipantSnapshot],
        at: DateTime<Utc>,
    ) -> Message {
        let sender = pick(&mut self.rng, participants).clone();
        let content = pick(&mut self.rng, MESSAGES).to_string();

        let reaction_count = self.config.reactions.sample(&mut self.rng);
        let reactions = (0..reaction_count)
            .map(|_| Reaction {
                id: ObjectId::new(),
                user_id: pick(&mut self.rng, participants).user_id,
                reaction_type: *pick(&mut self.rng, &ReactionType::ALL),
                timestamp: bson_time(at + self.seconds(self.config.reaction_delay_secs)),
            })
            .collect();

        // the sender gets a receipt too
        let receipts = participants
            .iter()
            .map(|participant| self.generate_receipt(participant, at))
            .collect();

        Message {
            id: ObjectId::new(),
            sender,
            content,
            message_type: MessageType::Text,
            timestamp: bson_time(at),
            is_deleted: false,
            reactions,
            receipts,
        }
    }

    fn generate_receipt(&mut self, participant: &ParticipantSnapshot, at: DateTime<Utc>) -> Receipt {
        let delivered_at = at + self.seconds(self.config.delivery_delay_secs);

        if self.rng.gen_bool(self.config.read_probability) {
            let read_at = delivered_at + self.seconds(self.config.read_delay_secs);
            Receipt {
                user_id: participant.user_id,
                status: ReceiptStatus::Read,
                delivered_at: bson_time(delivered_at),
                read_at: Some(bson_time(read_at)),
            }
        } else {
            Receipt {
                user_id: participant.user_id,
                status: ReceiptStatus::Delivered,
                delivered_at: bson_time(delivered_at),
                read_at: None,
            }
        }
    }

    fn seconds(&mut self, bounds: Bounds) -> Duration {
        Duration::seconds(bounds.sample(&mut self.rng) as i64)
    }
}

#[cfg(test)]
mod tests {
    use crate::dtos::UserSummaryDTO;
    use crate::entities::{ConversationType, ReceiptStatus};
    use crate::generator::{Bounds, Generator, GeneratorConfig};
    use chrono::{TimeZone, Utc};
    use mongodb::bson::oid::ObjectId;
    use std::collections::HashSet;

    fn population(size: usize) -> Vec<UserSummaryDTO> {
        (0..size)
            .map(|i| UserSummaryDTO {
                id: ObjectId::new(),
                username: format!("user{}", i),
                display_name: format!("user{}", i),
            })
            .collect()
    }

    fn generator(config: GeneratorConfig, seed: u64) -> Generator<rand::rngs::StdRng> {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        Generator::seeded(config, seed, now)
    }

    #[test]
    fn participants_are_distinct_members_of_the_population() {
        let users = population(10);
        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        let mut generator = generator(GeneratorConfig::with_counts(10, 0), 7);

        for _ in 0..200 {
            let picked = generator.sample_participants(&users).unwrap();
            let distinct: HashSet<_> = picked.iter().map(|u| u.id).collect();
            assert!((2..=6).contains(&picked.len()));
            assert_eq!(distinct.len(), picked.len());
            assert!(distinct.is_subset(&ids));
        }
    }

    #[test]
    fn participant_count_is_capped_by_population() {
        // two users: every conversation is direct and uses both of them
        let users = population(2);
        let mut generator = generator(GeneratorConfig::with_counts(2, 0), 3);

        for _ in 0..50 {
            assert_eq!(generator.sample_participants(&users).unwrap().len(), 2);
        }
    }

    #[test]
    fn sampling_fails_below_two_users() {
        let mut generator = generator(GeneratorConfig::with_counts(2, 0), 1);
        assert!(generator.sample_participants(&population(1)).is_err());
        assert!(generator.sample_participants(&[]).is_err());
    }

    #[test]
    fn conversation_type_and_title_follow_participant_count() {
        let users = population(20);
        let mut generator = generator(GeneratorConfig::with_counts(20, 0), 11);

        for _ in 0..40 {
            let conversation = generator.generate_conversation(&users).unwrap();
            if conversation.participants.len() == 2 {
                assert_eq!(conversation.conversation_type, ConversationType::Direct);
                assert!(conversation.title.is_none());
            } else {
                assert_eq!(conversation.conversation_type, ConversationType::Group);
                assert!(conversation.title.is_some());
            }
        }
    }

    #[test]
    fn messages_advance_the_clock_from_creation() {
        let users = population(8);
        let mut generator = generator(GeneratorConfig::with_counts(8, 0), 5);
        let conversation = generator.generate_conversation(&users).unwrap();

        assert!((50..=250).contains(&conversation.messages.len()));
        let mut previous = conversation.created_at.timestamp_millis();
        for message in &conversation.messages {
            let step = message.timestamp.timestamp_millis() - previous;
            assert!((1_000..=300_000).contains(&step), "step of {} ms", step);
            previous = message.timestamp.timestamp_millis();
        }
        assert_eq!(
            conversation.last_message_at,
            conversation.messages.last().unwrap().timestamp
        );
    }

    #[test]
    fn empty_conversation_falls_back_to_creation_time() {
        let config = GeneratorConfig {
            messages: Bounds::new(0, 0),
            ..GeneratorConfig::with_counts(4, 0)
        };
        let conversation = generator(config, 9)
            .generate_conversation(&population(4))
            .unwrap();

        assert_eq!(conversation.message_count, 0);
        assert!(conversation.messages.is_empty());
        assert_eq!(conversation.last_message_at, conversation.created_at);
    }

    #[test]
    fn receipts_cover_every_participant() {
        let users = population(12);
        let mut generator = generator(GeneratorConfig::with_counts(12, 0), 21);
        let conversation = generator.generate_conversation(&users).unwrap();

        for message in &conversation.messages {
            let receivers: HashSet<_> = message.receipts.iter().map(|r| r.user_id).collect();
            assert_eq!(message.receipts.len(), conversation.participants.len());
            assert_eq!(receivers.len(), conversation.participants.len());
            for receipt in &message.receipts {
                assert_eq!(receipt.read_at.is_some(), receipt.status == ReceiptStatus::Read);
            }
            assert!(message.reactions.len() <= 3);
        }
    }

    fn delay_secs(from: mongodb::bson::DateTime, to: mongodb::bson::DateTime) -> u64 {
        let millis = to.timestamp_millis() - from.timestamp_millis();
        assert!(millis >= 0 && millis % 1_000 == 0, "delay of {} ms", millis);
        (millis / 1_000) as u64
    }

    fn assert_delays_within(config: &GeneratorConfig, seed: u64) {
        let users = population(12);
        let mut generator = generator(config.clone(), seed);

        for conversation in generator.generate_conversations(&users).unwrap() {
            for message in &conversation.messages {
                for reaction in &message.reactions {
                    let delay = delay_secs(message.timestamp, reaction.timestamp);
                    assert!(config.reaction_delay_secs.contains(delay), "reaction after {}s", delay);
                }
                for receipt in &message.receipts {
                    let delay = delay_secs(message.timestamp, receipt.delivered_at);
                    assert!(config.delivery_delay_secs.contains(delay), "delivered after {}s", delay);
                    if let Some(read_at) = receipt.read_at {
                        let delay = delay_secs(receipt.delivered_at, read_at);
                        assert!(config.read_delay_secs.contains(delay), "read after {}s", delay);
                    }
                }
            }
        }
    }

    #[test]
    fn delays_stay_within_their_bounds() {
        assert_delays_within(&GeneratorConfig::with_counts(12, 5), 17);

        // narrow ranges so a value taken from the wrong bounds shows up
        let narrow = GeneratorConfig {
            reactions: Bounds::new(1, 3),
            reaction_delay_secs: Bounds::new(40, 45),
            delivery_delay_secs: Bounds::new(2, 3),
            read_delay_secs: Bounds::new(500, 510),
            read_probability: 1.0,
            ..GeneratorConfig::with_counts(12, 3)
        };
        assert_delays_within(&narrow, 18);
    }

    #[test]
    fn same_seed_same_content() {
        let users = population(15);
        let config = GeneratorConfig::with_counts(15, 4);

        let first = generator(config.clone(), 99).generate_conversations(&users).unwrap();
        let second = generator(config, 99).generate_conversations(&users).unwrap();

        assert_eq!(first.len(), 4);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.participants, b.participants);
            assert_eq!(a.message_count, b.message_count);
            let contents_a: Vec<_> = a.messages.iter().map(|m| (&m.content, m.timestamp)).collect();
            let contents_b: Vec<_> = b.messages.iter().map(|m| (&m.content, m.timestamp)).collect();
            assert_eq!(contents_a, contents_b);
        }
    }
}
