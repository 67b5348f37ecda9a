use std::collections::HashMap;

use data_models::{AttributeValue, RawRecord};

pub fn raw_record(fields: &[(&str, AttributeValue)]) -> RawRecord {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// The sentinel record holding the last deployed commit.
pub fn deploy_record() -> RawRecord {
    raw_record(&[
        ("eventType", AttributeValue::s("deploy")),
        ("timeCreated", AttributeValue::s("lastDeployedCommit")),
        ("id", AttributeValue::s("c0ffee42")),
        ("timeResolved", AttributeValue::s("1700000000000")),
        (
            "changes",
            AttributeValue::L(vec![AttributeValue::M(HashMap::from([
                ("id".to_string(), AttributeValue::s("c0ffee42")),
                ("timeCreated".to_string(), AttributeValue::n(1_700_000_000_000u64)),
            ]))]),
        ),
    ])
}

/// `count` full-projection records for `event_type`, one minute apart.
pub fn event_records(event_type: &str, count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let created = 1_700_000_000_000u64 + i as u64 * 60_000;
            raw_record(&[
                ("eventType", AttributeValue::s(event_type)),
                ("timeCreated", AttributeValue::s(created.to_string())),
                ("timeResolved", AttributeValue::s((created + 30_000).to_string())),
                ("id", AttributeValue::s(format!("{event_type}-{i}"))),
                ("changes", AttributeValue::L(Vec::new())),
            ])
        })
        .collect()
}

/// A record whose `changes` wrapper is empty.
pub fn malformed_record() -> RawRecord {
    raw_record(&[
        ("eventType", AttributeValue::s("deploy")),
        ("timeCreated", AttributeValue::s("5")),
        ("changes", AttributeValue::Unknown),
    ])
}
