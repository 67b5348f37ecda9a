pub trait DbConnectConfig {
    fn region(&self) -> &str;
    fn table_name(&self) -> &str;

    fn endpoint_url(&self) -> Option<&str> { None }
}

#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    pub region: String,
    pub table_name: String,
    pub endpoint_url: Option<String>,
}

impl DynamoDbConfig {
    /// Builds the config from `REGION`, `TABLE_NAME` and `DYNAMODB_ENDPOINT`
    /// as returned by `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            region: read("REGION").unwrap_or(defaults.region),
            table_name: read("TABLE_NAME").unwrap_or(defaults.table_name),
            endpoint_url: read("DYNAMODB_ENDPOINT"),
        }
    }
}

impl Default for DynamoDbConfig {
    fn default() -> Self {
        Self {
            region: "eu-north-1".into(),
            table_name: "data-platform-demo".into(),
            endpoint_url: None,
        }
    }
}

impl DbConnectConfig for DynamoDbConfig {
    fn region(&self) -> &str { &self.region }

    fn table_name(&self) -> &str { &self.table_name }

    fn endpoint_url(&self) -> Option<&str> { self.endpoint_url.as_deref() }
}
