//! Repositories module - access to the destination collections
//!
//! One repository per collection. The MongoDB repositories write the real
//! dataset; the in-memory ones implement the same traits for dry runs and
//! tests.

// ************************* NOTE ON THE MONGODB DRIVER ************************* //

/*
   Driver 3.x actions are builders awaited directly:
       collection.find(doc! {}).projection(doc! { "username": 1 }).await?
   `find` yields a Cursor, which is a Stream: collect it with
   futures::TryStreamExt::try_collect.
   `insert_many` refuses an empty batch, so the repositories short-circuit it.
   `drop` on a missing collection is not an error.
*/

pub mod conversation;
pub mod memory;
pub mod traits;
pub mod user;

pub use traits::{Clear, Count, InsertMany, ReadAll};

pub use conversation::{CONVERSATIONS_COLLECTION, ConversationRepository};
pub use memory::{MemoryConversationRepository, MemoryUserRepository};
pub use user::{USERS_COLLECTION, UserRepository};
