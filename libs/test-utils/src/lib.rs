pub mod fake_range_query;
pub mod fixtures;

pub use fake_range_query::FakeRangeQuery;
pub use fixtures::*;

/// Installs a test-scoped fmt subscriber; repeated calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}
