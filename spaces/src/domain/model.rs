//! Contains the models for spaces

use serde::{Deserialize, Serialize, ser::SerializeMap};

#[cfg(test)]
mod test;

/// The attributes a [SpaceRecord] can carry, named as they are stored
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum SpaceField {
    /// The primary key of the record
    Id,
    /// Where the space is
    Location,
    /// The display name of the space
    Name,
    /// Free form description
    Description,
    /// Link to a picture of the space
    PhotoUrl,
}

impl SpaceField {
    /// Whether the field may be changed after the record was created.
    /// Only the primary key is fixed.
    pub fn is_mutable(self) -> bool {
        !matches!(self, SpaceField::Id)
    }
}

/// A single persisted space, keyed by [SpaceRecord::id]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRecord {
    /// Assigned on creation, never supplied by the client
    pub id: String,
    /// Where the space is
    // records created through an update upsert only carry the updated attribute
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// The display name of the space
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Free form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link to a picture of the space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl SpaceRecord {
    /// Overwrite the value of a single attribute
    pub fn set(&mut self, field: SpaceField, value: String) {
        match field {
            SpaceField::Id => self.id = value,
            SpaceField::Location => self.location = value,
            SpaceField::Name => self.name = value,
            SpaceField::Description => self.description = Some(value),
            SpaceField::PhotoUrl => self.photo_url = Some(value),
        }
    }
}

/// The post-update value of the one attribute changed by an update.
/// Serializes as a single entry object, e.g. `{"location":"Melbourne"}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedField {
    /// The attribute that was changed
    pub field: SpaceField,
    /// Its value after the update
    pub value: String,
}

impl Serialize for UpdatedField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field.as_ref(), &self.value)?;
        map.end()
    }
}

/// Body returned for a newly created space
#[derive(Debug, Serialize)]
pub struct CreatedSpace<'a> {
    /// The generated id of the new record
    pub id: &'a str,
}

/// Errors caused by the data a client sent. These are safe to show to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// A required field is absent
    #[error("Missing required field: {0}")]
    MissingField(SpaceField),
    /// A field is present but does not have the expected type
    #[error("Invalid type for field: {field}. Expected {expected}.")]
    InvalidFieldType {
        /// The offending field
        field: SpaceField,
        /// The type the field should have had
        expected: &'static str,
    },
    /// The request body is not well formed json, or not the json shape we expect
    #[error("{0}")]
    InvalidJson(String),
    /// The update body does not describe a single changeable field
    #[error("{0}")]
    InvalidUpdate(String),
}

/// An error that occurred in the storage layer
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct StorageError(#[from] anyhow::Error);

/// Every way handling a space request can fail
#[derive(Debug, thiserror::Error)]
pub enum SpaceError {
    /// The client sent bad input
    #[error(transparent)]
    Client(#[from] ClientError),
    /// The store failed. The cause is never shown to the client
    #[error("An error occurred at the storage layer {0}")]
    Server(#[from] StorageError),
    /// A response body could not be serialized
    #[error("failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}
