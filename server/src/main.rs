mod config;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use data_dao::DynamoRangeQuery;
use data_http::{DataHandlers, DataServices};
use dynamo_connection::connect_dynamo_db;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(
        region = %config.dynamo.region,
        table = %config.dynamo.table_name,
        test_mode = config.is_test,
        "Loaded configuration"
    );

    let client = connect_dynamo_db(&config.dynamo).await;
    let range_query = DynamoRangeQuery::from_config(client, &config.dynamo);
    let data_services = DataServices::new(Arc::new(range_query), config.is_test);

    let app = Router::new()
        .route("/", get(health_check))
        .nest("/data", DataHandlers::routes().with_state(data_services))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Data platform server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(OpenApi)]
#[openapi(
    paths(health_check, data_http::handlers::get_data),
    components(schemas(data_models::DataRequest)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "data", description = "Cached event data access")
    ),
    info(
        title = "Data Platform API",
        description = "Cached range queries over event records",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = String)
    ),
    tag = "health"
)]
async fn health_check() -> impl IntoResponse { (StatusCode::OK, "OK") }
