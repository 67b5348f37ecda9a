use data_errors::{DataError, DataResult};
use data_models::{Item, RawRecord};
use tracing::{error, instrument};

/// Flattens wrapped records into plain items.
///
/// Absent or empty input yields an empty vector. A single field that cannot
/// be unwrapped fails the whole batch with [`DataError::MalformedRecord`].
#[instrument(skip_all, fields(records = records.as_ref().map_or(0, Vec::len)))]
pub fn normalize_records(records: Option<Vec<RawRecord>>) -> DataResult<Vec<Item>> {
    let Some(records) = records else {
        return Ok(Vec::new());
    };

    records
        .iter()
        .map(normalize_record)
        .collect::<DataResult<Vec<_>>>()
        .inspect_err(|e| error!(error = %e, "Failed to normalize records"))
}

fn normalize_record(record: &RawRecord) -> DataResult<Item> {
    record
        .iter()
        .map(|(field, value)| {
            value
                .unwrap_value()
                .map(|v| (field.clone(), v))
                .ok_or_else(|| DataError::MalformedRecord {
                    field: field.clone(),
                })
        })
        .collect()
}
