use async_trait::async_trait;
use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    model::person::{NewPerson, Person, UpdatePersonData},
};

pub mod document;
pub mod memory;
pub mod mongo;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Mongo storage engine requires a connection string")]
    MissingConnectionString,

    #[error("Storage engine unavailable: {0}")]
    Unavailable(String),

    #[error("Storage operation failed: {0}")]
    OperationFailed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Every operation is a single atomic call against the storage engine. Update / remove return `None`
/// when no record has the given id, callers decide what that means.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Confirms the storage engine is reachable, called once on start-up
    async fn ping(&self) -> StoreResult<()>;

    async fn list(&self) -> StoreResult<Vec<Person>>;
    async fn get(&self, id: &PersonId) -> StoreResult<Option<Person>>;
    async fn add(&self, person: NewPerson) -> StoreResult<Person>;
    async fn update(
        &self,
        id: &PersonId,
        update: UpdatePersonData,
    ) -> StoreResult<Option<Person>>;
    async fn remove(&self, id: &PersonId) -> StoreResult<Option<Person>>;
}
