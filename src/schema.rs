use chrono::{DateTime, Utc};
use database::model::person::{NewPerson, Person, UpdatePersonData, UpdateStatement};
use serde::{Deserialize, Deserializer, Serialize};

/// A person as returned by the API
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonResponse {
    pub fn from_person(person: Person) -> PersonResponse {
        PersonResponse {
            id: person.id.to_string(),
            name: person.name,
            image: person.image,
            title: person.title,
            created_at: person.created_at,
            updated_at: person.updated_at,
        }
    }
}

/// Body of a create request. Every field is optional, unknown fields are dropped
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct NewPersonRequest {
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
}

impl NewPersonRequest {
    pub fn to_new_person(self) -> NewPerson {
        NewPerson::new(self.name, self.image, self.title)
    }
}

/// Body of an update request. A missing field is left alone, `null` clears it
#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdatePersonRequest {
    #[serde(default, deserialize_with = "present_field")]
    pub name: UpdateStatement,
    #[serde(default, deserialize_with = "present_field")]
    pub image: UpdateStatement,
    #[serde(default, deserialize_with = "present_field")]
    pub title: UpdateStatement,
}

impl UpdatePersonRequest {
    pub fn to_update_person_data(self) -> UpdatePersonData {
        UpdatePersonData {
            name: self.name,
            image: self.image,
            title: self.title,
        }
    }
}

// Only called when the key is present, absent keys take the `NoChanges` default
fn present_field<'de, D>(deserializer: D) -> Result<UpdateStatement, D::Error>
where
    D: Deserializer<'de>,
{
    let statement = match Option::<String>::deserialize(deserializer)? {
        Some(value) => UpdateStatement::Set(value),
        None => UpdateStatement::Unset,
    };

    Ok(statement)
}
