//! This module defines all of the ports that the spaces domain requires

use crate::domain::model::{SpaceField, SpaceRecord, StorageError, UpdatedField};

/// Trait for interacting with the storage of [SpaceRecord]s.
/// Every method is a single store operation; none of them retry.
pub trait SpaceRepository: Send + Sync + 'static {
    /// Every stored record, in whatever order the store yields them
    fn list(&self) -> impl Future<Output = Result<Vec<SpaceRecord>, StorageError>> + Send;

    /// Point lookup by primary key
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<SpaceRecord>, StorageError>> + Send;

    /// Unconditionally write the record, overwriting any record with the same id
    fn create(&self, record: &SpaceRecord)
    -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Set exactly one attribute of the record identified by `id`, leaving the rest untouched.
    /// If no such record exists, one holding only `id` and the updated attribute is created.
    fn update_field(
        &self,
        id: &str,
        field: SpaceField,
        value: &str,
    ) -> impl Future<Output = Result<UpdatedField, StorageError>> + Send;

    /// Remove the record. Removing an id that does not exist is not an error
    fn delete_by_id(&self, id: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Port for producing identifiers for new records
pub trait IdGenerator: Send + Sync + 'static {
    /// A fresh identifier. No existence check is made against the store
    fn new_id(&self) -> String;
}
