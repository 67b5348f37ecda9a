use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Upstream query failed: {0}")]
    UpstreamQuery(#[source] BoxError),
    #[error("Malformed record: field `{field}` has no unwrappable value")]
    MalformedRecord { field: String },
    #[error("Cache error: {0}")]
    Cache(#[from] memory_cache::CacheError),
}

impl DataError {
    pub fn upstream<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::UpstreamQuery(Box::new(err))
    }
}

pub type DataResult<T> = Result<T, DataError>;
