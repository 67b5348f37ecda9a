use async_trait::async_trait;
use data_errors::DataResult;
use data_models::{RangeQueryDescriptor, RangeQueryOutput};

/// Executes a partition-key + sort-key-lower-bound query against the backing
/// store. Failures surface as [`data_errors::DataError::UpstreamQuery`].
#[async_trait]
pub trait RangeQueryService: Send + Sync {
    async fn query(
        &self, descriptor: &RangeQueryDescriptor,
    ) -> DataResult<RangeQueryOutput>;
}
