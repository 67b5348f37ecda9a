use aws_config::BehaviorVersion;
pub use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Region;
use tracing::{info, instrument};

pub mod config;

#[instrument(skip_all, name = "connect-dynamodb")]
pub async fn connect_dynamo_db<C>(config: &C) -> Client
where
    C: config::DbConnectConfig,
{
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region().to_string()));

    if let Some(endpoint) = config.endpoint_url() {
        info!(dynamodb.endpoint = endpoint, "Using endpoint override");
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;

    info!(
        dynamodb.region = config.region(),
        dynamodb.table = config.table_name(),
        dynamodb.connect = true
    );

    Client::new(&sdk_config)
}
