use std::collections::HashMap;

/// Runtime configuration, read from the environment once at start
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Empty if not set, the backend rejects such calls
    pub table_name: String,

    /// Custom DynamoDB endpoint, e.g. a local container at http://localhost:8000
    pub endpoint_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars().collect())
    }

    pub fn from_vars(env: HashMap<String, String>) -> Self {
        Self {
            table_name: env.get("DDB_TABLE_NAME").cloned().unwrap_or_default(),

            endpoint_url: env
                .get("DDB_ENDPOINT_URL")
                .filter(|url| !url.is_empty())
                .cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_table_and_endpoint() {
        let config = Config::from_vars(HashMap::from([
            ("DDB_TABLE_NAME".to_string(), "stuff".to_string()),
            (
                "DDB_ENDPOINT_URL".to_string(),
                "http://localhost:8000".to_string(),
            ),
        ]));

        assert_eq!(config.table_name, "stuff");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn missing_vars_fall_back_to_empty() {
        let config = Config::from_vars(HashMap::from([(
            "DDB_ENDPOINT_URL".to_string(),
            String::new(),
        )]));

        assert_eq!(config, Config::default());
    }
}
