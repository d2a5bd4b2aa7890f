pub mod config;
pub mod error;
pub mod handler;
pub mod item;
pub mod json;
pub mod logger;
pub mod store;
pub mod writer;

use crate::config::Config;
use crate::store::DynamoStore;
use crate::writer::Writer;
use std::sync::Arc;

/// Dependencies shared by all invocations of a handler
///
/// Built once at process start, the DynamoDB client inside is safe to reuse concurrently.
#[derive(Clone)]
pub struct State {
    pub writer: Writer,
}

impl State {
    /// Set up logging, read config, and connect to the table
    pub async fn init() -> Self {
        logger::init();

        let config = Config::from_env();
        let store = DynamoStore::from_config(&config).await;

        tracing::info!(
            table = store.table(),
            endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
            "Initialized DynamoDB client"
        );

        Self {
            writer: Writer::new(Arc::new(store)),
        }
    }
}
