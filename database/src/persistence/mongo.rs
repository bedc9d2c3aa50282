use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    error::{Error as MongoError, ErrorKind},
    options::ReturnDocument,
    Client, Collection, Database,
};

use crate::{
    consts::consts::{PersonId, DEFAULT_DATABASE_NAME},
    model::person::{NewPerson, Person, UpdatePersonData},
};

use super::{
    document::{id_filter, update_modifications, PersonDocument},
    PersonStore, StoreError, StoreResult,
};

impl From<MongoError> for StoreError {
    fn from(err: MongoError) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Io(_) => StoreError::Unavailable(err.to_string()),
            _ => StoreError::OperationFailed(err.to_string()),
        }
    }
}

/// Document store engine. The driver's client holds a connection pool, one `MongoStore` is opened
/// on start-up and shared by every request.
pub struct MongoStore {
    database: Database,
    collection: Collection<PersonDocument>,
}

impl MongoStore {
    /// `database_name` falls back to the database in the connection string, then to `test`
    pub async fn connect(
        url: &str,
        database_name: Option<&str>,
        collection: &str,
    ) -> StoreResult<Self> {
        let client = Client::with_uri_str(url).await?;

        let database = match database_name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME)),
        };

        log::info!(
            "Mongo storage engine [Database: {}, Collection: {}]",
            database.name(),
            collection
        );

        Ok(Self {
            collection: database.collection::<PersonDocument>(collection),
            database,
        })
    }

    pub fn collection(&self) -> &Collection<PersonDocument> {
        &self.collection
    }
}

#[async_trait]
impl PersonStore for MongoStore {
    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;

        log::info!("Connected to Mongo");

        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Person>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<PersonDocument> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .map(PersonDocument::into_person)
            .collect())
    }

    async fn get(&self, id: &PersonId) -> StoreResult<Option<Person>> {
        let document = self.collection.find_one(id_filter(id)).await?;

        Ok(document.map(PersonDocument::into_person))
    }

    async fn add(&self, person: NewPerson) -> StoreResult<Person> {
        let document =
            PersonDocument::from_new_person(person, PersonId::new(), bson::DateTime::now());

        self.collection.insert_one(&document).await?;

        Ok(document.into_person())
    }

    async fn update(
        &self,
        id: &PersonId,
        update: UpdatePersonData,
    ) -> StoreResult<Option<Person>> {
        let document = self
            .collection
            .find_one_and_update(
                id_filter(id),
                update_modifications(&update, bson::DateTime::now()),
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(document.map(PersonDocument::into_person))
    }

    async fn remove(&self, id: &PersonId) -> StoreResult<Option<Person>> {
        let document = self.collection.find_one_and_delete(id_filter(id)).await?;

        Ok(document.map(PersonDocument::into_person))
    }
}
