use chrono::{DateTime, Utc};
use data_models::{
    DataRequest, LAST_DEPLOYED_COMMIT, Projection, RangeQueryDescriptor,
};

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Window used in test mode so fixture data older than the default window
/// still matches.
pub const TEST_MODE_WINDOW_DAYS: i64 = 1000;

/// Turns a [`DataRequest`] into a range query descriptor.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilterBuilder {
    test_mode: bool,
}

impl QueryFilterBuilder {
    pub fn new(test_mode: bool) -> Self { Self { test_mode } }

    pub fn build(
        &self, request: &DataRequest, now: DateTime<Utc>,
    ) -> RangeQueryDescriptor {
        let sort_key_lower_bound = if request.get_last_deployed_commit {
            LAST_DEPLOYED_COMMIT.to_string()
        }
        else {
            (now.timestamp_millis() - self.window_millis(request)).to_string()
        };

        let projection = if request.only_get_count {
            Projection::Count
        }
        else {
            Projection::Full
        };

        RangeQueryDescriptor {
            partition_key_value: request.key.clone(),
            sort_key_lower_bound,
            projection,
        }
    }

    fn window_millis(&self, request: &DataRequest) -> i64 {
        let days = if self.test_mode {
            TEST_MODE_WINDOW_DAYS
        }
        else {
            i64::from(request.window_days())
        };
        days * MILLIS_PER_DAY
    }
}
