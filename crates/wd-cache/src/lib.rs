pub mod bounded;
pub mod key;

pub use bounded::{BoundedCache, Entry};
pub use key::{CacheKey, KeyBuilder};
