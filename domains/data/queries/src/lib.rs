pub mod get_data;
pub mod query_filter;

pub use get_data::{DataCache, GetDataQueryHandler};
pub use query_filter::{MILLIS_PER_DAY, QueryFilterBuilder, TEST_MODE_WINDOW_DAYS};
