use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::post};
use common_errors::AppError;
use data_dao::RangeQueryService;
use data_models::{DataRequest, DataResponse};
use data_queries::{GetDataQueryHandler, QueryFilterBuilder};
use tracing::instrument;

#[derive(Clone)]
pub struct DataServices {
    pub get_data: GetDataQueryHandler,
}

impl DataServices {
    pub fn new(
        range_query: Arc<dyn RangeQueryService>, test_mode: bool,
    ) -> Self {
        Self {
            get_data: GetDataQueryHandler::new(
                range_query,
                QueryFilterBuilder::new(test_mode),
            ),
        }
    }
}

pub struct DataHandlers;

impl DataHandlers {
    pub fn routes() -> Router<DataServices> {
        Router::new().route("/", post(get_data))
    }
}

#[utoipa::path(
    post,
    path = "/data",
    request_body = DataRequest,
    responses(
        (status = 200, description = "Items for the key, or their count when onlyGetCount is set", body = serde_json::Value),
        (status = 500, description = "Upstream query or record normalization failed", body = String)
    ),
    tag = "data"
)]
#[instrument(skip_all)]
pub async fn get_data(
    State(services): State<DataServices>, Json(request): Json<DataRequest>,
) -> Result<Json<DataResponse>, AppError> {
    let response = services
        .get_data
        .execute(request)
        .await
        .map_err(AppError::from_error)?;
    Ok(Json(response))
}
