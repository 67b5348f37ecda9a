use crate::RawRecord;

/// Sort-key value that marks the last deployed commit record.
pub const LAST_DEPLOYED_COMMIT: &str = "lastDeployedCommit";

/// Fields fetched for each matching record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    Count,
    Full,
}

impl Projection {
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Count => &["eventType", "timeCreated"],
            Self::Full => {
                &["eventType", "timeCreated", "timeResolved", "id", "changes"]
            }
        }
    }

    pub fn expression(&self) -> String { self.fields().join(", ") }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeQueryDescriptor {
    pub partition_key_value: String,
    pub sort_key_lower_bound: String,
    pub projection: Projection,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeQueryOutput {
    /// Number of matches reported by the service, independent of how many
    /// items came back.
    pub match_count: u64,
    pub items: Option<Vec<RawRecord>>,
}
