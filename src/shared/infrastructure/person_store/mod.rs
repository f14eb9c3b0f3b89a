use crate::modules::persons::core::person::{Person, PersonFields};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Ordered collection of person records.
///
/// A missing id is a normal outcome and comes back as `Ok(None)`; `StoreError` is reserved for
/// backend failures.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// All records in insertion order, as a snapshot.
    async fn list(&self) -> Result<Vec<Person>, StoreError>;
    async fn get(&self, id: &str) -> Result<Option<Person>, StoreError>;
    /// Assigns a fresh random id and appends the record.
    async fn create(&self, fields: PersonFields) -> Result<Person, StoreError>;
    /// Replaces every field but the id, keeping the record's position.
    async fn replace(&self, id: &str, fields: PersonFields) -> Result<Option<Person>, StoreError>;
    /// Removes the record and returns it.
    async fn delete(&self, id: &str) -> Result<Option<Person>, StoreError>;
}

pub mod in_memory;
