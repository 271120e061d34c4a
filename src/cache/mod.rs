//! Disk cache for geocoding responses
//!
//! Search queries hit a rate-limited public API, so results are persisted
//! to the XDG cache directory and served cache-first.

pub mod manager;

pub use manager::{slugify_key, CacheManager, CachedData};
