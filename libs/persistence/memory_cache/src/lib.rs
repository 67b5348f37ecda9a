//! Process-lifetime, in-memory cache for serialized query results.
//!
//! Entries are stored as opaque JSON blobs and are never expired or evicted
//! while the process lives. A later `put` for the same key replaces the
//! previous blob in a single insert.

pub mod memory;
pub mod value;

pub use memory::MemoryCache;
pub use value::{CacheError, Json};

pub type CacheResult<T> = Result<T, CacheError>;
