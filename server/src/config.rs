use dynamo_connection::config::DynamoDbConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dynamo: DynamoDbConfig,
    pub is_test: bool,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            dynamo: DynamoDbConfig::from_lookup(&lookup),
            is_test: flag_enabled(lookup("IS_TEST").as_deref()),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or_else(port_default),
        }
    }
}

/// Any non-empty value enables a flag except `0` and `false`.
fn flag_enabled(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}

fn port_default() -> u16 { 8880 }
