use std::marker::PhantomData;

use bytes::Bytes;
use moka::future::Cache;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{CacheResult, Json};

/// Unbounded memory cache keyed by string, holding JSON blobs of `T`.
///
/// Cloning is cheap and every clone shares the same entries.
pub struct MemoryCache<T> {
    cache: Cache<String, Bytes>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for MemoryCache<T> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self { Self::new() }
}

impl<T> MemoryCache<T> {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
            _phantom: PhantomData,
        }
    }

    pub fn with_cache(cache: Cache<String, Bytes>) -> Self {
        Self {
            cache,
            _phantom: PhantomData,
        }
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.cache.get(key).await.is_some()
    }
}

impl<T> MemoryCache<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Returns the cached value, or `None` when the key is missing or the
    /// stored blob no longer decodes as `T`.
    pub async fn get(&self, key: &str) -> Option<T> {
        let bytes = self.cache.get(key).await?;
        match Json::<T>::from_bytes(&bytes) {
            Ok(json) => {
                debug!(cache.key = key, cache.hit = true);
                Some(json.inner())
            }
            Err(e) => {
                warn!(cache.key = key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    /// Replaces any previous entry for `key`. The value is fully serialized
    /// before the insert, so a failure leaves the old entry untouched.
    pub async fn put(&self, key: &str, value: &T) -> CacheResult<()> {
        let bytes = Json(value).to_bytes()?;
        self.cache.insert(key.to_string(), Bytes::from(bytes)).await;
        debug!(cache.key = key, cache.put = true);
        Ok(())
    }
}
