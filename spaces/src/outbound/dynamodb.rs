use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use serde_dynamo::{from_item, from_items, to_item};

use crate::domain::{
    model::{SpaceField, SpaceRecord, StorageError, UpdatedField},
    ports::SpaceRepository,
};


/// Name of the partition key attribute of the spaces table
const PRIMARY_KEY: &str = "id";

/// Reads and writes [SpaceRecord]s in a single DynamoDB table.
/// The client is cheap to clone and safe to share between concurrent invocations.
#[derive(Debug, Clone)]
pub struct DynamoSpaceRepository {
    client: Client,
    table: Option<String>,
}

impl DynamoSpaceRepository {
    /// The table is optional here so that a missing table name surfaces on the first
    /// store call rather than at start-up
    pub fn new(client: Client, table: Option<String>) -> Self {
        Self { client, table }
    }

    fn table(&self) -> anyhow::Result<&str> {
        self.table
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("TABLE_NAME is not configured"))
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_owned())
    }

    #[tracing::instrument(skip(self))]
    async fn scan_spaces(&self) -> anyhow::Result<Vec<SpaceRecord>> {
        let table = self.table()?;
        let mut spaces = Vec::new();
        let mut last_evaluated_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(table)
                .set_exclusive_start_key(last_evaluated_key)
                .send()
                .await
                .context("failed to scan spaces table")?;

            if let Some(items) = output.items {
                let page: Vec<SpaceRecord> =
                    from_items(items).context("failed to deserialize spaces")?;
                spaces.extend(page);
            }

            last_evaluated_key = output.last_evaluated_key;
            if last_evaluated_key.is_none() {
                break;
            }
        }

        tracing::trace!(count = spaces.len(), "scanned spaces");
        Ok(spaces)
    }

    #[tracing::instrument(skip(self))]
    async fn get_space(&self, id: &str) -> anyhow::Result<Option<SpaceRecord>> {
        let output = self
            .client
            .get_item()
            .table_name(self.table()?)
            .key(PRIMARY_KEY, Self::key(id))
            .send()
            .await
            .context("failed to get item from spaces table")?;

        output
            .item
            .map(from_item)
            .transpose()
            .context("failed to deserialize space")
    }

    #[tracing::instrument(skip(self))]
    async fn put_space(&self, record: &SpaceRecord) -> anyhow::Result<()> {
        let item: HashMap<String, AttributeValue> =
            to_item(record).context("failed to serialize space")?;

        self.client
            .put_item()
            .table_name(self.table()?)
            .set_item(Some(item))
            .send()
            .await
            .context("could not put item, dynamodb")?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn set_space_field(
        &self,
        id: &str,
        field: SpaceField,
        value: &str,
    ) -> anyhow::Result<UpdatedField> {
        let output = self
            .client
            .update_item()
            .table_name(self.table()?)
            .key(PRIMARY_KEY, Self::key(id))
            .update_expression("SET #field = :value")
            .expression_attribute_names("#field", field.as_ref())
            .expression_attribute_values(":value", AttributeValue::S(value.to_owned()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .context("failed to update space")?;

        let value = output
            .attributes
            .as_ref()
            .and_then(|attributes| attributes.get(field.as_ref()))
            .and_then(|attribute| attribute.as_s().ok())
            .cloned()
            .context("updated attribute missing from dynamodb response")?;

        Ok(UpdatedField { field, value })
    }

    #[tracing::instrument(skip(self))]
    async fn delete_space(&self, id: &str) -> anyhow::Result<()> {
        self.client
            .delete_item()
            .table_name(self.table()?)
            .key(PRIMARY_KEY, Self::key(id))
            .send()
            .await
            .context("failed to delete space")?;

        Ok(())
    }
}

impl SpaceRepository for DynamoSpaceRepository {
    async fn list(&self) -> Result<Vec<SpaceRecord>, StorageError> {
        Ok(self.scan_spaces().await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<SpaceRecord>, StorageError> {
        Ok(self.get_space(id).await?)
    }

    async fn create(&self, record: &SpaceRecord) -> Result<(), StorageError> {
        Ok(self.put_space(record).await?)
    }

    async fn update_field(
        &self,
        id: &str,
        field: SpaceField,
        value: &str,
    ) -> Result<UpdatedField, StorageError> {
        Ok(self.set_space_field(id, field, value).await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StorageError> {
        Ok(self.delete_space(id).await?)
    }
}
