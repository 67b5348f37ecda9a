use std::sync::Arc;

use chrono::{TimeZone, Utc};
use data_errors::DataError;
use data_models::{DataRequest, DataResponse, Projection, RangeQueryOutput};
use data_queries::{GetDataQueryHandler, MILLIS_PER_DAY, QueryFilterBuilder};
use serde_json::json;
use test_utils::*;

fn setup_handler(
    fake: &FakeRangeQuery, test_mode: bool,
) -> GetDataQueryHandler {
    init_test_tracing();
    GetDataQueryHandler::new(
        Arc::new(fake.clone()),
        QueryFilterBuilder::new(test_mode),
    )
}

#[tokio::test]
async fn test_first_fetch_populates_cache_and_second_is_served_from_it() {
    let fake = FakeRangeQuery::returning(event_records("incident", 3));
    let handler = setup_handler(&fake, false);

    let request = DataRequest::builder().key("incident").build();
    let first = handler.execute(request).await.unwrap();

    let items = first.items().unwrap().to_vec();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], json!("incident-0"));
    assert_eq!(fake.call_count(), 1);
    assert_eq!(handler.cache().get("incident").await, Some(items.clone()));

    // Any other field combination for the same key is a cache hit.
    let again = DataRequest::builder()
        .key("incident")
        .days(2)
        .get_last_deployed_commit(true)
        .build();
    let second = handler.execute(again).await.unwrap();

    assert_eq!(second, DataResponse::Items(items));
    assert_eq!(fake.call_count(), 1);
}

#[tokio::test]
async fn test_count_on_cache_hit_uses_cached_length() {
    let fake = FakeRangeQuery::returning(event_records("incident", 4));
    let handler = setup_handler(&fake, false);

    handler
        .execute(DataRequest::builder().key("incident").build())
        .await
        .unwrap();
    let count = handler
        .execute(
            DataRequest::builder()
                .key("incident")
                .only_get_count(true)
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(count, DataResponse::Count(4));
    assert_eq!(fake.call_count(), 1);
}

#[tokio::test]
async fn test_count_on_miss_returns_match_count_without_caching() {
    let fake = FakeRangeQuery::with_output(RangeQueryOutput {
        match_count: 42,
        items: Some(event_records("incident", 2)),
    });
    let handler = setup_handler(&fake, false);

    let count = handler
        .execute(
            DataRequest::builder()
                .key("incident")
                .only_get_count(true)
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(count, DataResponse::Count(42));
    assert_eq!(fake.last_call().unwrap().projection, Projection::Count);
    assert!(!handler.cache().contains("incident").await);

    // The next full request must go back to the source.
    fake.set_items(event_records("incident", 2));
    let items = handler
        .execute(DataRequest::builder().key("incident").build())
        .await
        .unwrap();

    assert_eq!(items.items().unwrap().len(), 2);
    assert_eq!(fake.call_count(), 2);
    assert_eq!(fake.last_call().unwrap().projection, Projection::Full);
}

#[tokio::test]
async fn test_last_deployed_commit_scenario() {
    let fake = FakeRangeQuery::returning(vec![deploy_record()]);
    let handler = setup_handler(&fake, false);

    let request = DataRequest::builder()
        .key("deploy")
        .get_last_deployed_commit(true)
        .build();
    let response = handler.execute(request).await.unwrap();

    let descriptor = fake.last_call().unwrap();
    assert_eq!(descriptor.partition_key_value, "deploy");
    assert_eq!(descriptor.sort_key_lower_bound, "lastDeployedCommit");
    assert_eq!(descriptor.projection, Projection::Full);

    let expected = json!([{
        "eventType": "deploy",
        "timeCreated": "lastDeployedCommit",
        "id": "c0ffee42",
        "timeResolved": "1700000000000",
        "changes": [{"id": "c0ffee42", "timeCreated": "1700000000000"}]
    }]);
    assert_eq!(serde_json::to_value(&response).unwrap(), expected);
    assert_eq!(
        serde_json::to_value(handler.cache().get("deploy").await).unwrap(),
        expected
    );
}

#[tokio::test]
async fn test_window_lower_bound_uses_clock_and_test_mode() {
    let now = Utc.timestamp_millis_opt(1_750_000_000_000).unwrap();
    let request = DataRequest::builder().key("incident").days(7).build();

    let fake = FakeRangeQuery::returning(Vec::new());
    setup_handler(&fake, false)
        .execute_at(request.clone(), now)
        .await
        .unwrap();
    assert_eq!(
        fake.last_call().unwrap().sort_key_lower_bound,
        (1_750_000_000_000 - 7 * MILLIS_PER_DAY).to_string()
    );

    let fake = FakeRangeQuery::returning(Vec::new());
    setup_handler(&fake, true)
        .execute_at(request, now)
        .await
        .unwrap();
    assert_eq!(
        fake.last_call().unwrap().sort_key_lower_bound,
        (1_750_000_000_000 - 1000 * MILLIS_PER_DAY).to_string()
    );
}

#[tokio::test]
async fn test_absent_items_yield_empty_cached_set() {
    let fake = FakeRangeQuery::with_output(RangeQueryOutput {
        match_count: 0,
        items: None,
    });
    let handler = setup_handler(&fake, false);

    let response = handler
        .execute(DataRequest::builder().key("quiet").build())
        .await
        .unwrap();

    assert_eq!(response, DataResponse::Items(Vec::new()));
    assert_eq!(handler.cache().get("quiet").await, Some(Vec::new()));
}

#[tokio::test]
async fn test_malformed_record_fails_and_caches_nothing() {
    let mut records = event_records("deploy", 2);
    records.push(malformed_record());
    let fake = FakeRangeQuery::returning(records);
    let handler = setup_handler(&fake, false);

    let result = handler
        .execute(DataRequest::builder().key("deploy").build())
        .await;

    match result {
        Err(DataError::MalformedRecord { field }) => assert_eq!(field, "changes"),
        other => panic!("Expected MalformedRecord, got {other:?}"),
    }
    assert!(!handler.cache().contains("deploy").await);
}

#[tokio::test]
async fn test_upstream_failure_propagates_without_retry() {
    let fake = FakeRangeQuery::failing("ProvisionedThroughputExceededException");
    let handler = setup_handler(&fake, false);

    let result = handler
        .execute(DataRequest::builder().key("deploy").build())
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, DataError::UpstreamQuery(_)));
    assert!(err.to_string().contains("ProvisionedThroughputExceededException"));
    assert_eq!(fake.call_count(), 1);
    assert!(!handler.cache().contains("deploy").await);
}
