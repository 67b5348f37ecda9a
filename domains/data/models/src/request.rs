use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;

use crate::Item;

pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// A single logical `getData` request.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct DataRequest {
    /// Event type used as the partition key value.
    #[builder(setter(into))]
    pub key: String,
    #[serde(default)]
    #[builder(default)]
    pub only_get_count: bool,
    #[serde(default)]
    #[builder(default)]
    pub get_last_deployed_commit: bool,
    /// Window size in days, counted back from now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub days: Option<u32>,
}

impl DataRequest {
    /// Requested window size; a missing or zero value falls back to
    /// [`DEFAULT_WINDOW_DAYS`].
    pub fn window_days(&self) -> u32 {
        match self.days {
            Some(days) if days > 0 => days,
            _ => DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Either the match count or the flattened items, serialized as a bare
/// JSON number or array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataResponse {
    Count(u64),
    Items(Vec<Item>),
}

impl DataResponse {
    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Count(count) => Some(*count),
            Self::Items(_) => None,
        }
    }

    pub fn items(&self) -> Option<&[Item]> {
        match self {
            Self::Items(items) => Some(items),
            Self::Count(_) => None,
        }
    }
}
