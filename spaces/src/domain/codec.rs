//! Json parsing of request bodies and serialization of response bodies

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::domain::model::ClientError;


/// Parse a raw request body. Malformed input becomes [ClientError::InvalidJson]
/// carrying the parser's message.
pub fn parse(raw: &str) -> Result<Value, ClientError> {
    serde_json::from_str(raw).map_err(|err| {
        tracing::warn!(error=?err, "failed to parse json");
        ClientError::InvalidJson(err.to_string())
    })
}

/// Parse a raw body, treating malformed input as "no data"
pub fn try_parse<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw)
        .inspect_err(|err| tracing::warn!(error=?err, "failed to parse json"))
        .ok()
}

/// Serialize a response body
pub fn encode<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string(value).context("failed to serialize response body")
}
