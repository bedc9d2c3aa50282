use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::{
    consts::consts::PersonId,
    model::person::{NewPerson, Person, UpdatePersonData, UpdateStatement},
};

/// Stored shape of a person. Field names match documents written by earlier deployments of the
/// service, unknown fields (e.g. `__v`) are ignored on read.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersonDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: bson::DateTime,
}

impl PersonDocument {
    pub fn from_new_person(person: NewPerson, id: PersonId, now: bson::DateTime) -> Self {
        PersonDocument {
            id: id.to_object_id(),
            name: person.name,
            image: person.image,
            title: person.title,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_person(self) -> Person {
        Person {
            id: PersonId(self.id),
            name: self.name,
            image: self.image,
            title: self.title,
            created_at: to_chrono(self.created_at),
            updated_at: to_chrono(self.updated_at),
        }
    }
}

fn to_chrono(date_time: bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(date_time.timestamp_millis()).unwrap_or_default()
}

pub fn id_filter(id: &PersonId) -> Document {
    doc! { "_id": id.to_object_id() }
}

/// Builds the `$set` / `$unset` modification for an update. `updatedAt` is always refreshed, even
/// when no field changes.
pub fn update_modifications(update: &UpdatePersonData, now: bson::DateTime) -> Document {
    let mut set = doc! { "updatedAt": now };
    let mut unset = Document::new();

    for (field, statement) in update.statements() {
        match statement {
            UpdateStatement::Set(value) => {
                set.insert(field, value.clone());
            }
            UpdateStatement::Unset => {
                unset.insert(field, "");
            }
            UpdateStatement::NoChanges => {}
        }
    }

    let mut modifications = doc! { "$set": set };

    if !unset.is_empty() {
        modifications.insert("$unset", unset);
    }

    modifications
}
