use std::{fmt, sync::Arc};

use crate::{
    consts::consts::DEFAULT_COLLECTION,
    persistence::{
        memory::MemoryStore, mongo::MongoStore, PersonStore, StoreError, StoreResult,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageEngine {
    Mongo,
    Memory,
}

impl fmt::Display for StorageEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageEngine::Mongo => write!(f, "mongo"),
            StorageEngine::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub storage_engine: StorageEngine,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub collection: String,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    pub fn set_storage_engine(mut self, storage_engine: StorageEngine) -> Self {
        self.storage_engine = storage_engine;
        self
    }

    /// Connection string for the mongo engine, ignored by the memory engine
    pub fn set_database_url(mut self, database_url: Option<String>) -> Self {
        self.database_url = database_url;
        self
    }

    /// Overrides the database named in the connection string
    pub fn set_database_name(mut self, database_name: Option<String>) -> Self {
        self.database_name = database_name;
        self
    }

    pub fn set_collection(mut self, collection: String) -> Self {
        self.collection = collection;
        self
    }

    /// Opens the configured storage engine and confirms it is reachable
    pub async fn connect(&self) -> StoreResult<Arc<dyn PersonStore>> {
        let store: Arc<dyn PersonStore> = match self.storage_engine {
            StorageEngine::Memory => Arc::new(MemoryStore::new()),
            StorageEngine::Mongo => {
                let url = self
                    .database_url
                    .as_deref()
                    .ok_or(StoreError::MissingConnectionString)?;

                let store =
                    MongoStore::connect(url, self.database_name.as_deref(), &self.collection)
                        .await?;

                Arc::new(store)
            }
        };

        store.ping().await?;

        Ok(store)
    }
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            storage_engine: StorageEngine::Mongo,
            database_url: None,
            database_name: None,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

#[cfg(test)]
impl DatabaseOptions {
    pub fn new_test() -> Self {
        DatabaseOptions::default().set_storage_engine(StorageEngine::Memory)
    }
}
