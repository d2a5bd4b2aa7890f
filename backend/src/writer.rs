use crate::error::{Fault, WriteError};
use crate::item::{self, ItemData, ItemKeys, StuffItem};
use crate::store::{Item, ItemStore, PutMode};
use std::sync::Arc;

/// Puts items into the table, guarding creates against existing keys
#[derive(Clone)]
pub struct Writer {
    store: Arc<dyn ItemStore>,
}

impl Writer {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Put item into the table
    ///
    /// With `upsert` an existing item is replaced entirely,
    /// otherwise the write fails with a client fault if the key is taken.
    /// Errors are logged and returned unchanged.
    pub async fn put_item(
        &self,
        keys: &ItemKeys,
        data: &ItemData,
        upsert: bool,
    ) -> Result<(), WriteError> {
        let mode = if upsert {
            PutMode::Upsert
        } else {
            PutMode::Create
        };

        let result = match marshall(keys, data) {
            Ok(item) => self.store.put(item, mode).await,
            Err(error) => Err(error),
        };

        match &result {
            Ok(()) => tracing::debug!(id = keys.id(), ?mode, "Item written"),

            Err(error) => tracing::error!(
                id = keys.id(),
                ?mode,
                kind = %error.kind,
                details = %error.message,
                fault = %error.fault,
                conflict = error.is_conflict(),
                "Failed to put item"
            ),
        }

        result
    }
}

/// Merge keys and attributes into a single DynamoDB item
fn marshall(keys: &ItemKeys, data: &ItemData) -> Result<Item, WriteError> {
    if let Some(name) = item::reserved_attribute(data) {
        return Err(WriteError::new(
            "ReservedAttribute",
            &format!("The attribute \"{name}\" is reserved for the item key"),
            Fault::Client,
        ));
    }

    serde_dynamo::aws_sdk_dynamodb_1::to_item(StuffItem { keys, data })
        .map_err(|e| WriteError::new("SerializationException", &e.to_string(), Fault::Client))
}
