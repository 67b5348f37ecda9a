use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{
    operation::query::{QueryOutput, builders::QueryFluentBuilder},
    types::AttributeValue as DynamoValue,
};
use data_errors::{DataError, DataResult};
use data_models::{
    AttributeValue, RangeQueryDescriptor, RangeQueryOutput, RawRecord,
};
use dynamo_connection::{Client, config::DbConnectConfig};
use tracing::{debug, instrument};

use crate::RangeQueryService;

const KEY_CONDITION: &str =
    "eventType = :eventType AND timeCreated >= :timeCreated";

#[derive(Clone, Debug)]
pub struct DynamoRangeQuery {
    client: Client,
    table_name: String,
}

impl DynamoRangeQuery {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn from_config<C: DbConnectConfig>(client: Client, config: &C) -> Self {
        Self::new(client, config.table_name())
    }
}

#[async_trait]
impl RangeQueryService for DynamoRangeQuery {
    /// Reads a single result page; `LastEvaluatedKey` is not followed, so
    /// results beyond the 1 MB page limit are not counted or returned.
    #[instrument(skip_all, fields(
        table = %self.table_name,
        event_type = %descriptor.partition_key_value,
    ))]
    async fn query(
        &self, descriptor: &RangeQueryDescriptor,
    ) -> DataResult<RangeQueryOutput> {
        let output = shape_query(self.client.query(), &self.table_name, descriptor)
            .send()
            .await
            .map_err(DataError::upstream)?;

        let output = to_range_query_output(&output);
        debug!(
            match_count = output.match_count,
            returned = output.items.as_ref().map_or(0, Vec::len)
        );

        Ok(output)
    }
}

fn shape_query(
    query: QueryFluentBuilder, table_name: &str,
    descriptor: &RangeQueryDescriptor,
) -> QueryFluentBuilder {
    query
        .table_name(table_name)
        .key_condition_expression(KEY_CONDITION)
        .projection_expression(descriptor.projection.expression())
        .expression_attribute_values(
            ":eventType",
            DynamoValue::S(descriptor.partition_key_value.clone()),
        )
        .expression_attribute_values(
            ":timeCreated",
            DynamoValue::S(descriptor.sort_key_lower_bound.clone()),
        )
}

fn to_range_query_output(output: &QueryOutput) -> RangeQueryOutput {
    RangeQueryOutput {
        match_count: u64::try_from(output.count()).unwrap_or_default(),
        items: Some(output.items().iter().map(to_raw_record).collect()),
    }
}

fn to_raw_record(item: &HashMap<String, DynamoValue>) -> RawRecord {
    item.iter()
        .map(|(field, value)| (field.clone(), to_attribute_value(value)))
        .collect()
}

fn to_attribute_value(value: &DynamoValue) -> AttributeValue {
    match value {
        DynamoValue::S(s) => AttributeValue::S(s.clone()),
        DynamoValue::N(n) => AttributeValue::N(n.clone()),
        DynamoValue::Bool(b) => AttributeValue::Bool(*b),
        DynamoValue::Null(n) => AttributeValue::Null(*n),
        DynamoValue::L(values) => {
            AttributeValue::L(values.iter().map(to_attribute_value).collect())
        }
        DynamoValue::M(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), to_attribute_value(v)))
                .collect(),
        ),
        DynamoValue::Ss(values) => AttributeValue::Ss(values.clone()),
        DynamoValue::Ns(values) => AttributeValue::Ns(values.clone()),
        DynamoValue::B(blob) => AttributeValue::B(blob.as_ref().to_vec()),
        DynamoValue::Bs(blobs) => AttributeValue::Bs(
            blobs.iter().map(|blob| blob.as_ref().to_vec()).collect(),
        ),
        _ => AttributeValue::Unknown,
    }
}
