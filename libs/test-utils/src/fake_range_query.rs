use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use data_dao::RangeQueryService;
use data_errors::{DataError, DataResult};
use data_models::{RangeQueryDescriptor, RangeQueryOutput, RawRecord};

#[derive(Default)]
struct FakeState {
    output: RangeQueryOutput,
    failure: Option<String>,
    calls: Vec<RangeQueryDescriptor>,
}

/// In-memory stand-in for the range query service. Records every descriptor
/// it receives and answers with a canned output or failure.
#[derive(Clone, Default)]
pub struct FakeRangeQuery {
    state: Arc<Mutex<FakeState>>,
}

impl FakeRangeQuery {
    pub fn new() -> Self { Self::default() }

    /// Answers with `items`, reporting their length as the match count.
    pub fn returning(items: Vec<RawRecord>) -> Self {
        let fake = Self::new();
        fake.set_items(items);
        fake
    }

    pub fn with_output(output: RangeQueryOutput) -> Self {
        let fake = Self::new();
        fake.set_output(output);
        fake
    }

    pub fn failing(message: impl Into<String>) -> Self {
        let fake = Self::new();
        fake.state().failure = Some(message.into());
        fake
    }

    pub fn set_items(&self, items: Vec<RawRecord>) {
        self.set_output(RangeQueryOutput {
            match_count: items.len() as u64,
            items: Some(items),
        });
    }

    pub fn set_output(&self, output: RangeQueryOutput) {
        let mut state = self.state();
        state.output = output;
        state.failure = None;
    }

    pub fn call_count(&self) -> usize { self.state().calls.len() }

    pub fn last_call(&self) -> Option<RangeQueryDescriptor> {
        self.state().calls.last().cloned()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake range query state poisoned")
    }
}

#[async_trait]
impl RangeQueryService for FakeRangeQuery {
    async fn query(
        &self, descriptor: &RangeQueryDescriptor,
    ) -> DataResult<RangeQueryOutput> {
        let mut state = self.state();
        state.calls.push(descriptor.clone());

        match &state.failure {
            Some(message) => {
                Err(DataError::upstream(std::io::Error::other(message.clone())))
            }
            None => Ok(state.output.clone()),
        }
    }
}
