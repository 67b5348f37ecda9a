pub mod attribute;
pub mod query;
pub mod request;

pub use attribute::{AttributeValue, Item, RawRecord};
pub use query::{
    LAST_DEPLOYED_COMMIT, Projection, RangeQueryDescriptor, RangeQueryOutput,
};
pub use request::{DEFAULT_WINDOW_DAYS, DataRequest, DataResponse};
