//! Integration tests for a full seeding run on the in-memory store
//!
//! Covers cardinality, referential integrity, causality, cached counters
//! and receipt completeness of the stored dataset.

mod common;

#[cfg(test)]
mod population_tests {
    use super::common::{create_test_generator, create_test_store};
    use seeder::dtos::UserSummaryDTO;
    use seeder::entities::{Conversation, ReceiptStatus};
    use seeder::generator::GeneratorConfig;
    use seeder::repositories::ReadAll;
    use seeder::services::{run, verify_conversations, verify_store};
    use std::collections::HashSet;

    async fn seeded_store(
        users: usize,
        conversations: usize,
        seed: u64,
    ) -> (Vec<UserSummaryDTO>, Vec<Conversation>) {
        let (user_repo, conversation_repo) = create_test_store();
        let mut generator = create_test_generator(users, conversations, seed);

        run(&user_repo, &conversation_repo, &mut generator)
            .await
            .expect("seeding should succeed");

        (
            user_repo.read_all().await.unwrap(),
            conversation_repo.read_all().await.unwrap(),
        )
    }

    // ============================================================
    // U = 10, C = 3
    // ============================================================

    #[tokio::test]
    async fn test_small_population_scenario() {
        let (users, conversations) = seeded_store(10, 3, 2024).await;

        assert_eq!(users.len(), 10, "Exactly 10 user documents expected");
        assert_eq!(conversations.len(), 3, "Exactly 3 conversations expected");

        let population: HashSet<_> = users.iter().map(|u| u.id).collect();
        for conversation in &conversations {
            let members: HashSet<_> = conversation.participants.iter().map(|p| p.user_id).collect();

            assert!((2..=6).contains(&conversation.participants.len()));
            assert_eq!(members.len(), conversation.participants.len(), "Participants must be distinct");
            assert!(members.is_subset(&population), "Participants must come from the 10 users");
            assert!((50..=250).contains(&conversation.messages.len()));

            for message in &conversation.messages {
                assert!(members.contains(&message.sender.user_id));
                assert!(message.reactions.iter().all(|r| members.contains(&r.user_id)));
                assert!(message.receipts.iter().all(|r| members.contains(&r.user_id)));
            }
        }
    }

    #[tokio::test]
    async fn test_cardinality_matches_report() {
        let (user_repo, conversation_repo) = create_test_store();
        let mut generator = create_test_generator(40, 12, 5);

        let report = run(&user_repo, &conversation_repo, &mut generator).await.unwrap();

        assert_eq!(report.users, 40);
        assert_eq!(report.conversations, 12);

        let conversations = conversation_repo.read_all().await.unwrap();
        let messages: u64 = conversations.iter().map(|c| c.messages.len() as u64).sum();
        assert_eq!(report.messages, messages);
        assert!(report.read_receipts <= report.receipts);
    }

    #[tokio::test]
    async fn test_cached_counters_match_embedded_data() {
        let (_, conversations) = seeded_store(30, 10, 77).await;

        for conversation in &conversations {
            assert_eq!(conversation.participants_count as usize, conversation.participants.len());
            assert_eq!(conversation.message_count as usize, conversation.messages.len());
            assert!(!conversation.is_archived);
        }
    }

    #[tokio::test]
    async fn test_timestamps_are_causal() {
        let (_, conversations) = seeded_store(25, 8, 13).await;

        for conversation in &conversations {
            for pair in conversation.messages.windows(2) {
                assert!(pair[0].timestamp <= pair[1].timestamp);
            }
            for message in &conversation.messages {
                let sent = message.timestamp.timestamp_millis();
                for reaction in &message.reactions {
                    let delay = reaction.timestamp.timestamp_millis() - sent;
                    assert!((1_000..=60_000).contains(&delay), "reaction delay {} ms", delay);
                }
                for receipt in &message.receipts {
                    let delivered = receipt.delivered_at.timestamp_millis();
                    assert!((1_000..=15_000).contains(&(delivered - sent)));
                    if let Some(read_at) = receipt.read_at {
                        let delay = read_at.timestamp_millis() - delivered;
                        assert!((10_000..=600_000).contains(&delay), "read delay {} ms", delay);
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn test_receipts_are_complete() {
        let (_, conversations) = seeded_store(25, 8, 31).await;

        for conversation in &conversations {
            for message in &conversation.messages {
                assert_eq!(message.receipts.len(), conversation.participants.len());
                for receipt in &message.receipts {
                    assert_eq!(
                        receipt.read_at.is_some(),
                        receipt.status == ReceiptStatus::Read,
                        "read_at must be present iff the receipt is read"
                    );
                }
            }
        }
    }

    #[tokio::test]
    async fn test_verifier_accepts_stored_dataset() {
        let (user_repo, conversation_repo) = create_test_store();
        let mut generator = create_test_generator(50, 20, 8);
        run(&user_repo, &conversation_repo, &mut generator).await.unwrap();

        let violations = verify_store(&conversation_repo, &GeneratorConfig::default()).await.unwrap();
        assert!(violations.is_empty(), "Unexpected violations: {:?}", violations);

        let conversations = conversation_repo.read_all().await.unwrap();
        assert!(verify_conversations(&conversations, &GeneratorConfig::default()).is_empty());
    }

    #[tokio::test]
    async fn test_zero_conversations() {
        let (users, conversations) = seeded_store(5, 0, 1).await;

        assert_eq!(users.len(), 5);
        assert!(conversations.is_empty());
    }
}
