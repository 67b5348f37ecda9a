use std::sync::Arc;

use chrono::{DateTime, Utc};
use data_dao::{RangeQueryService, normalize_records};
use data_errors::DataResult;
use data_models::{DataRequest, DataResponse, Item};
use memory_cache::MemoryCache;
use tracing::{debug, info, instrument};

use crate::QueryFilterBuilder;

/// Normalized items per request key, kept for the life of the process.
pub type DataCache = MemoryCache<Vec<Item>>;

/// Serves `getData` requests: cache first, then one range query per miss.
#[derive(Clone)]
pub struct GetDataQueryHandler {
    range_query: Arc<dyn RangeQueryService>,
    cache: DataCache,
    filter: QueryFilterBuilder,
}

impl GetDataQueryHandler {
    pub fn new(
        range_query: Arc<dyn RangeQueryService>, filter: QueryFilterBuilder,
    ) -> Self {
        Self::with_cache(range_query, filter, DataCache::new())
    }

    pub fn with_cache(
        range_query: Arc<dyn RangeQueryService>, filter: QueryFilterBuilder,
        cache: DataCache,
    ) -> Self {
        Self {
            range_query,
            cache,
            filter,
        }
    }

    pub fn cache(&self) -> &DataCache { &self.cache }

    pub async fn execute(&self, request: DataRequest) -> DataResult<DataResponse> {
        self.execute_at(request, Utc::now()).await
    }

    /// Same as [`execute`](Self::execute) with an explicit clock reading.
    ///
    /// A cache hit is keyed on `request.key` alone, so the cached item set is
    /// returned whatever the window, sentinel or count flags of the request.
    /// Count requests that miss the cache never populate it.
    #[instrument(skip_all, fields(
        key = %request.key,
        only_get_count = request.only_get_count,
        last_deployed_commit = request.get_last_deployed_commit,
    ))]
    pub async fn execute_at(
        &self, request: DataRequest, now: DateTime<Utc>,
    ) -> DataResult<DataResponse> {
        if let Some(items) = self.cache.get(&request.key).await {
            debug!(items = items.len(), "Returning cached data");
            return Ok(if request.only_get_count {
                DataResponse::Count(items.len() as u64)
            }
            else {
                DataResponse::Items(items)
            });
        }

        let descriptor = self.filter.build(&request, now);
        debug!(
            sort_key_lower_bound = %descriptor.sort_key_lower_bound,
            projection = ?descriptor.projection,
            "Cache miss, querying source"
        );
        let output = self.range_query.query(&descriptor).await?;

        if request.only_get_count {
            return Ok(DataResponse::Count(output.match_count));
        }

        let items = normalize_records(output.items)?;
        self.cache.put(&request.key, &items).await?;
        info!(items = items.len(), "Fetched and cached data");

        Ok(DataResponse::Items(items))
    }
}
