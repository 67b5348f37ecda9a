pub mod dynamo;
pub mod normalizer;
pub mod range_query;

pub use dynamo::DynamoRangeQuery;
pub use normalizer::normalize_records;
pub use range_query::RangeQueryService;
