mod cache;
pub use cache::Cache;

mod options;
pub use options::Options;

mod memory;
pub use memory::MemoryCache;

mod error;
pub use error::{CacheError, Result};
