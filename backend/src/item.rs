use serde::{Deserialize, Serialize};

/// Attribute names occupied by the item key
pub const RESERVED_ATTRIBUTES: [&str; 2] = ["pk", "sk"];

/// Arbitrary JSON attributes of an item, as sent by the caller
pub type ItemData = serde_json::Map<String, serde_json::Value>;

/// Primary key of an item
///
/// Partition and sort keys always hold the same value,
/// so the key space is effectively a flat list of ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemKeys {
    pub pk: String,
    pub sk: String,
}

impl ItemKeys {
    pub fn id(&self) -> &str {
        &self.pk
    }
}

/// The record as it is written to the table: keys and attributes in one flat map
#[derive(Debug, Serialize)]
pub struct StuffItem<'a> {
    #[serde(flatten)]
    pub keys: &'a ItemKeys,

    #[serde(flatten)]
    pub data: &'a ItemData,
}

/// Keys for a new item
///
/// Use the id if provided, otherwise generate a random one.
pub fn create_keys(id: Option<&str>) -> ItemKeys {
    let key = match id {
        Some(id) => id.to_string(),
        None => uuid::Uuid::new_v4().to_string(),
    };

    ItemKeys {
        pk: key.clone(),
        sk: key,
    }
}

/// Keys for an item with a known id
pub fn get_keys(id: &str) -> ItemKeys {
    ItemKeys {
        pk: id.to_string(),
        sk: id.to_string(),
    }
}

/// The first caller supplied attribute that would overwrite a key attribute
pub fn reserved_attribute(data: &ItemData) -> Option<&'static str> {
    RESERVED_ATTRIBUTES
        .into_iter()
        .find(|name| data.contains_key(*name))
}
