use super::{Item, ItemStore, PutMode};
use crate::config::Config;
use crate::error::WriteError;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;

/// Reject the write if either key attribute is already present
const CREATE_CONDITION: &str = "attribute_not_exists(pk) AND attribute_not_exists(sk)";

/// Table in DynamoDB
///
/// The client is created once and reused across invocations.
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    pub fn new(client: &Client, table: &str) -> Self {
        Self {
            client: client.clone(),
            table: table.to_string(),
        }
    }

    /// Load AWS config from the environment, point to a local endpoint if configured
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        let client = Client::new(&loader.load().await);
        Self::new(&client, &config.table_name)
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl ItemStore for DynamoStore {
    async fn put(&self, item: Item, mode: PutMode) -> Result<(), WriteError> {
        let mut request = self
            .client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item));

        if mode == PutMode::Create {
            request = request.condition_expression(CREATE_CONDITION);
        }

        let output = request.send().await?;
        tracing::debug!(?output, "PutItem succeeded");
        Ok(())
    }
}
