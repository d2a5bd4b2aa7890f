mod dynamodb;
#[cfg(test)]
pub(crate) mod memory;
pub use dynamodb::DynamoStore;

use crate::error::WriteError;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// Marshalled item, ready to be sent to the table
pub type Item = HashMap<String, AttributeValue>;

/// How to treat an item which already exists under the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutMode {
    /// Fail with a conflict if the key is taken
    Create,
    /// Replace the existing item entirely
    Upsert,
}

/// Storage backend able to put a single item, optionally guarded by a key existence check
///
/// Exactly one write attempt is made per call.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn put(&self, item: Item, mode: PutMode) -> Result<(), WriteError>;
}
