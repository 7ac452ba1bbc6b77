// Cache module for the expiring per-subject store.
// Persists API responses keyed by (subject, kind) with a 30-minute TTL.

pub mod paths;
pub mod store;

pub use paths::Kind;
pub use store::{CACHE_TTL, CacheStore, Clock, SystemClock};
