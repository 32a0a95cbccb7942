//! Checks client supplied json against the space schema before anything is written

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::domain::model::{ClientError, SpaceField, SpaceRecord};


/// Whether a field has to be present on a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absence is a [ClientError::MissingField]
    Required,
    /// May be absent or null
    Optional,
}

/// Every field of a space, in the order they are checked
pub const SPACE_SCHEMA: [(SpaceField, Presence); 5] = [
    (SpaceField::Id, Presence::Required),
    (SpaceField::Location, Presence::Required),
    (SpaceField::Name, Presence::Required),
    (SpaceField::Description, Presence::Optional),
    (SpaceField::PhotoUrl, Presence::Optional),
];

/// All space fields are strings
const EXPECTED_TYPE: &str = "string";

/// An untyped space exactly as the client sent it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceCandidate(Map<String, Value>);

impl SpaceCandidate {
    /// Wrap a parsed body. Anything but a json object is rejected
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        match value {
            Value::Object(object) => Ok(Self(object)),
            _ => Err(ClientError::InvalidJson(
                "request body must be a JSON object".to_string(),
            )),
        }
    }

    /// Replace whatever id the client supplied with `id`
    pub fn with_id(mut self, id: String) -> Self {
        self.0
            .insert(SpaceField::Id.as_ref().to_string(), Value::String(id));
        self
    }

    /// Check the candidate against [SPACE_SCHEMA].
    /// For each field presence is checked before type, and the first failure wins.
    pub fn validate(&self) -> Result<(), ClientError> {
        for (field, presence) in SPACE_SCHEMA {
            match (self.0.get(field.as_ref()), presence) {
                (None, Presence::Required) => return Err(ClientError::MissingField(field)),
                (None | Some(Value::Null), Presence::Optional) => {}
                (Some(Value::String(_)), _) => {}
                (Some(_), _) => {
                    return Err(ClientError::InvalidFieldType {
                        field,
                        expected: EXPECTED_TYPE,
                    });
                }
            }
        }
        Ok(())
    }

    /// Validate and convert into a typed record. Fields outside the schema are dropped.
    pub fn into_record(self) -> Result<SpaceRecord, ClientError> {
        self.validate()?;
        serde_json::from_value(Value::Object(self.0))
            .map_err(|err| ClientError::InvalidJson(err.to_string()))
    }
}

/// The single attribute change described by an update body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// The attribute to change
    pub field: SpaceField,
    /// Its new value
    pub value: String,
}

impl FieldUpdate {
    /// Take the first key/value pair of the body, in the order the client wrote them.
    /// Any further pairs are ignored.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        let Value::Object(object) = value else {
            return Err(ClientError::InvalidJson(
                "request body must be a JSON object".to_string(),
            ));
        };

        if object.len() > 1 {
            tracing::debug!(
                ignored = object.len() - 1,
                "update body has more than one field, only the first is applied"
            );
        }

        let Some((name, value)) = object.into_iter().next() else {
            return Err(ClientError::InvalidUpdate(
                "request body must name a field to update".to_string(),
            ));
        };

        let field = SpaceField::from_str(&name)
            .map_err(|_| ClientError::InvalidUpdate(format!("Unknown field: {name}")))?;

        if !field.is_mutable() {
            return Err(ClientError::InvalidUpdate(format!(
                "Field cannot be updated: {field}"
            )));
        }

        match value {
            Value::String(value) => Ok(Self { field, value }),
            _ => Err(ClientError::InvalidFieldType {
                field,
                expected: EXPECTED_TYPE,
            }),
        }
    }
}
