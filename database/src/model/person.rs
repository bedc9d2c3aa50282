use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a person that has not been persisted yet. The storage engine assigns the id and timestamps
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NewPerson {
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
}

impl NewPerson {
    pub fn new(name: Option<String>, image: Option<String>, title: Option<String>) -> Self {
        NewPerson { name, image, title }
    }

    pub fn new_test() -> Self {
        NewPerson {
            name: Some("Full Name".to_string()),
            image: Some("https://example.com/avatar.png".to_string()),
            title: Some("Title".to_string()),
        }
    }

    pub fn into_person(self, id: PersonId, now: DateTime<Utc>) -> Person {
        Person {
            id,
            name: self.name,
            image: self.image,
            title: self.title,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum UpdateStatement {
    Set(String),
    Unset,
    #[default]
    NoChanges,
}

impl UpdateStatement {
    fn apply(&self, field: &mut Option<String>) {
        match self {
            UpdateStatement::Set(value) => *field = Some(value.clone()),
            UpdateStatement::Unset => *field = None,
            UpdateStatement::NoChanges => {}
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UpdatePersonData {
    pub name: UpdateStatement,
    pub image: UpdateStatement,
    pub title: UpdateStatement,
}

impl UpdatePersonData {
    /// Named fields paired with their statement, in document order
    pub fn statements(&self) -> [(&'static str, &UpdateStatement); 3] {
        [
            ("name", &self.name),
            ("image", &self.image),
            ("title", &self.title),
        ]
    }
}

impl Person {
    /// Applies the update statements and refreshes `updated_at`. The id and `created_at` never change
    pub fn apply_update(&mut self, update: &UpdatePersonData, now: DateTime<Utc>) {
        update.name.apply(&mut self.name);
        update.image.apply(&mut self.image);
        update.title.apply(&mut self.title);

        self.updated_at = now;
    }
}
