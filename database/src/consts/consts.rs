use std::{fmt, str::FromStr};

use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
/// Identifier of a person, a document id assigned by the storage engine on creation
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub ObjectId);

#[derive(Error, Debug, PartialEq)]
#[error("Invalid person id: {0}")]
pub struct InvalidPersonId(pub String);

impl PersonId {
    pub fn new() -> PersonId {
        PersonId(ObjectId::new())
    }

    pub fn to_object_id(self) -> ObjectId {
        self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for PersonId {
    type Err = InvalidPersonId;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(value)
            .map(PersonId)
            .map_err(|_| InvalidPersonId(value.to_string()))
    }
}

// Plain hex string on the wire, the bson default would be {"$oid": "..."}
impl Serialize for PersonId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;

        value.parse().map_err(de::Error::custom)
    }
}

// Values
/// Used when the connection string does not name a database
pub const DEFAULT_DATABASE_NAME: &str = "test";
pub const DEFAULT_COLLECTION: &str = "people";

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_its_own_display_output() {
        let id = PersonId::new();

        let parsed: PersonId = id.to_string().parse().expect("should parse own output");

        assert_eq!(parsed, id);
    }

    #[test]
    fn new_ids_are_unique() {
        let ids: Vec<PersonId> = (0..100).map(|_| PersonId::new()).collect();

        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "id {} was generated twice", id);
        }
    }

    #[rstest]
    #[case("")]
    #[case("123")]
    #[case("not-an-id")]
    #[case("zzzzzzzzzzzzzzzzzzzzzzzz")]
    #[case("507f1f77bcf86cd7994390111")]
    fn rejects_malformed_ids(#[case] input: &str) {
        let result = input.parse::<PersonId>();

        assert_eq!(result, Err(InvalidPersonId(input.to_string())));
    }

    #[test]
    fn accepts_hex_document_ids() {
        let id: PersonId = "507f1f77bcf86cd799439011".parse().expect("valid hex id");

        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }
}
