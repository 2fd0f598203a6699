//! Common repository traits
//!
//! Generic interfaces for the few operations a seeding run needs. Every
//! destination collection is write-once: there is no update or single
//! delete, only a full clear before repopulating.

use crate::core::SeedError;

/// Trait for discarding the whole content of a collection
pub trait Clear {
    /// Drops every document of the collection
    ///
    /// # Returns
    /// * `Ok(())` - Collection is empty (or did not exist)
    /// * `Err(SeedError)` - Store unreachable
    async fn clear(&self) -> Result<(), SeedError>;
}

/// Trait for bulk inserting new documents in one write
///
/// # Type Parameters
/// * `CreateDTO` - Document to insert; the store assigns `_id` when absent
pub trait InsertMany<CreateDTO> {
    /// Inserts all documents in a single round trip
    ///
    /// # Arguments
    /// * `data` - Documents to insert (an empty slice is a no-op)
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of inserted documents
    /// * `Err(SeedError)` - Error during insertion
    async fn insert_many(&self, data: &[CreateDTO]) -> Result<usize, SeedError>;
}

/// Trait for reading back every document of a collection
///
/// # Type Parameters
/// * `Entity` - Type (or projection) the documents are read into
pub trait ReadAll<Entity> {
    /// # Note
    /// Documents come back in store order, which may not match insertion order.
    async fn read_all(&self) -> Result<Vec<Entity>, SeedError>;
}

/// Trait for counting the documents of a collection
pub trait Count {
    async fn count(&self) -> Result<u64, SeedError>;
}
