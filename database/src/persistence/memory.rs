use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    consts::consts::PersonId,
    model::person::{NewPerson, Person, UpdatePersonData},
};

use super::{PersonStore, StoreResult};

/// In-process storage engine, data lives as long as the process does.
///
/// Rows are keyed by document id, which leads with a creation timestamp, so listing comes back in
/// roughly insertion order like the mongo engine does. Callers should not rely on it.
#[derive(Default)]
pub struct MemoryStore {
    person_rows: RwLock<BTreeMap<PersonId, Person>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Person>> {
        let rows = self.person_rows.read().await;

        Ok(rows.values().cloned().collect())
    }

    async fn get(&self, id: &PersonId) -> StoreResult<Option<Person>> {
        let rows = self.person_rows.read().await;

        Ok(rows.get(id).cloned())
    }

    async fn add(&self, person: NewPerson) -> StoreResult<Person> {
        let mut rows = self.person_rows.write().await;

        let person = person.into_person(PersonId::new(), Utc::now());
        rows.insert(person.id, person.clone());

        Ok(person)
    }

    async fn update(
        &self,
        id: &PersonId,
        update: UpdatePersonData,
    ) -> StoreResult<Option<Person>> {
        let mut rows = self.person_rows.write().await;

        let person = match rows.get_mut(id) {
            Some(person) => person,
            None => return Ok(None),
        };

        person.apply_update(&update, Utc::now());

        Ok(Some(person.clone()))
    }

    async fn remove(&self, id: &PersonId) -> StoreResult<Option<Person>> {
        let mut rows = self.person_rows.write().await;

        Ok(rows.remove(id))
    }
}
