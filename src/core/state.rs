//! Store State - handles to the destination database
//!
//! Holds the MongoDB client and one repository per destination collection.

use crate::core::{Config, SeedError};
use crate::repositories::{ConversationRepository, UserRepository};
use mongodb::{Client, bson::doc};
use tracing::{debug, info};

pub struct SeedState {
    /// Client kept alive for the whole run
    pub client: Client,

    /// Repository for the `users` collection
    pub user: UserRepository,

    /// Repository for the `conversations` collection
    pub conversation: ConversationRepository,
}

impl SeedState {
    /// Connects to the store and verifies it is reachable.
    ///
    /// The driver connects lazily, so a `ping` is issued here to fail fast
    /// before anything is dropped.
    ///
    /// # Arguments
    /// * `config` - Loaded configuration (connection URL and database name)
    ///
    /// # Returns
    /// * `Ok(SeedState)` - Store reachable, repositories ready
    /// * `Err(SeedError)` - Connectivity error
    pub async fn connect(config: &Config) -> Result<Self, SeedError> {
        debug!("Connecting to {}", Config::mask_url(&config.mongodb_url));
        let client = Client::with_uri_str(&config.mongodb_url).await?;
        let db = client.database(&config.database_name);

        db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to database '{}'", config.database_name);

        Ok(Self {
            user: UserRepository::new(&db),
            conversation: ConversationRepository::new(&db),
            client,
        })
    }
}
