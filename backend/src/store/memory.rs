use super::{Item, ItemStore, PutMode};
use crate::error::{Fault, WriteError};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use std::sync::Mutex;

/// Table kept in memory, behaves like DynamoDB for single puts
#[derive(Default)]
pub(crate) struct MemoryStore {
    items: Mutex<HashMap<(String, String), Item>>,
}

impl MemoryStore {
    pub(crate) fn get(&self, id: &str) -> Option<Item> {
        self.items
            .lock()
            .unwrap()
            .get(&(id.to_string(), id.to_string()))
            .cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub(crate) fn all(&self) -> Vec<Item> {
        self.items.lock().unwrap().values().cloned().collect()
    }
}

fn key_attr(item: &Item, name: &str) -> Result<String, WriteError> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        _ => Err(WriteError::new(
            "ValidationException",
            &format!("Missing the key {name} in the item"),
            Fault::Client,
        )),
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn put(&self, item: Item, mode: PutMode) -> Result<(), WriteError> {
        let key = (key_attr(&item, "pk")?, key_attr(&item, "sk")?);
        let mut items = self.items.lock().unwrap();

        if mode == PutMode::Create && items.contains_key(&key) {
            return Err(WriteError::conflict());
        }

        items.insert(key, item);
        Ok(())
    }
}

/// Store which fails every write with the given error
pub(crate) struct FailingStore(pub(crate) WriteError);

#[async_trait]
impl ItemStore for FailingStore {
    async fn put(&self, _item: Item, _mode: PutMode) -> Result<(), WriteError> {
        Err(self.0.clone())
    }
}
