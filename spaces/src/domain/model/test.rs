//! Tests for the space models

use super::*;
use std::str::FromStr;

#[test]
fn test_field_names_match_stored_attributes() {
    assert_eq!(SpaceField::Id.as_ref(), "id");
    assert_eq!(SpaceField::PhotoUrl.to_string(), "photoUrl");
    assert_eq!(SpaceField::from_str("location").unwrap(), SpaceField::Location);
    assert!(SpaceField::from_str("PhotoUrl").is_err());
    assert!(SpaceField::from_str("owner").is_err());
}

#[test]
fn test_only_id_is_immutable() {
    assert!(!SpaceField::Id.is_mutable());
    assert!(SpaceField::Location.is_mutable());
    assert!(SpaceField::PhotoUrl.is_mutable());
}

#[test]
fn test_record_serialization_skips_absent_optionals() -> anyhow::Result<()> {
    let record = SpaceRecord {
        id: "abc".to_string(),
        location: "Sydney".to_string(),
        name: "HQ".to_string(),
        description: None,
        photo_url: Some("https://example.com/hq.png".to_string()),
    };

    let value = serde_json::to_value(&record)?;

    assert_eq!(
        value,
        serde_json::json!({
            "id": "abc",
            "location": "Sydney",
            "name": "HQ",
            "photoUrl": "https://example.com/hq.png",
        })
    );
    Ok(())
}

#[test]
fn test_record_serialization_skips_unset_strings() -> anyhow::Result<()> {
    let record: SpaceRecord = serde_json::from_value(serde_json::json!({
        "id": "ghost",
        "location": "Melbourne",
    }))?;
    assert_eq!(record.name, "");

    assert_eq!(
        serde_json::to_value(&record)?,
        serde_json::json!({ "id": "ghost", "location": "Melbourne" })
    );
    Ok(())
}

#[test]
fn test_space_error_names_the_failing_layer() {
    let storage = SpaceError::from(StorageError::from(anyhow::anyhow!("throttled")));
    assert!(storage.to_string().contains("storage layer"));

    let serialization = match serde_json::from_str::<serde_json::Value>("[") {
        Err(err) => SpaceError::from(err),
        Ok(value) => panic!("expected a json error, got {value}"),
    };
    assert!(
        serialization
            .to_string()
            .starts_with("failed to serialize response body")
    );
}

#[test]
fn test_record_set_overwrites_one_field() {
    let mut record = SpaceRecord {
        id: "abc".to_string(),
        location: "Sydney".to_string(),
        name: "HQ".to_string(),
        description: Some("main office".to_string()),
        photo_url: None,
    };

    record.set(SpaceField::Location, "Melbourne".to_string());

    assert_eq!(record.location, "Melbourne");
    assert_eq!(record.name, "HQ");
    assert_eq!(record.description.as_deref(), Some("main office"));
}

#[test]
fn test_updated_field_serializes_as_single_entry() -> anyhow::Result<()> {
    let updated = UpdatedField {
        field: SpaceField::Location,
        value: "Melbourne".to_string(),
    };

    assert_eq!(serde_json::to_string(&updated)?, r#"{"location":"Melbourne"}"#);
    Ok(())
}

#[test]
fn test_client_error_messages() {
    assert_eq!(
        ClientError::MissingField(SpaceField::Name).to_string(),
        "Missing required field: name"
    );
    assert_eq!(
        ClientError::InvalidFieldType {
            field: SpaceField::PhotoUrl,
            expected: "string",
        }
        .to_string(),
        "Invalid type for field: photoUrl. Expected string."
    );
}
